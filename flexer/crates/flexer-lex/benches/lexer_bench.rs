//! Lexer Benchmarks
//!
//! Measures scan throughput for the language presets and for symbol-heavy
//! input. Run with: `cargo bench --package flexer-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use flexer_lex::lang::{c, lua, python};
use flexer_lex::{Lexer, LexerConfig, TokenKind};

fn lexer_token_count(source: &str, config: &LexerConfig) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source, config).count()
}

const LUA_SOURCE: &str = r#"
local function fib(n)
  if n < 2 then return n end
  return fib(n-1) + fib(n-2)
end

--[[ this is a
     multi-line comment ]]
print([[Hello "Lua" world!]] .. [==[raw ]] string]==])
local t = { x = 0x1F, y = 3.5e-2, [1] = 'one' }
for i = 1, #t do t[i] = t[i] // 2 end
"#;

const C_SOURCE: &str = r#"
static unsigned long hash(const char *s) {
    unsigned long h = 5381;
    /* djb2 */
    while (*s) {
        h = ((h << 5) + h) + (unsigned char)*s++;
    }
    return h; // done
}
"#;

fn bench_lexer_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_presets");

    let lua = lua::config().unwrap();
    group.throughput(Throughput::Bytes(LUA_SOURCE.len() as u64));
    group.bench_function("lua", |b| {
        b.iter(|| lexer_token_count(black_box(LUA_SOURCE), &lua))
    });

    let c_like = c::config().unwrap();
    group.throughput(Throughput::Bytes(C_SOURCE.len() as u64));
    group.bench_function("c", |b| {
        b.iter(|| lexer_token_count(black_box(C_SOURCE), &c_like))
    });

    let py = python::config().unwrap();
    let source = "def add(a, b) -> int:\n    return a + b  # hello\nx = 42.5e-10\n";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("python", |b| {
        b.iter(|| lexer_token_count(black_box(source), &py))
    });

    group.finish();
}

fn bench_lexer_symbols(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_symbols");

    // Many symbols sharing a first byte exercise the longest-match buckets.
    let config = LexerConfig::builder()
        .symbols((1..=16).map(|n| ("=".repeat(n), TokenKind(TokenKind::FIRST_CUSTOM.0 + n as i32))))
        .build()
        .unwrap();
    let source = "= == === ==== ================ ".repeat(64);

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("equals_runs", |b| {
        b.iter(|| lexer_token_count(black_box(&source), &config))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");
    let config = LexerConfig::builder().build().unwrap();

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("123456 1_000_000 0b1010"), &config))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("3.14159 1_000.000_1 6.02e23"), &config))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("0xDEADBEEF 0x1A_u8"), &config))
    });

    group.bench_function("long_string", |b| {
        let source = "\"This is a longer string that contains some text for benchmarking purposes.\"";
        b.iter(|| lexer_token_count(black_box(source), &config))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");
    let config = lua::config().unwrap();

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("local very_long_variable_name = 42"), &config))
    });

    group.bench_function("many_keywords", |b| {
        b.iter(|| {
            lexer_token_count(
                black_box("if a then b elseif c then d else e end while f do g end"),
                &config,
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_presets,
    bench_lexer_symbols,
    bench_lexer_literals,
    bench_lexer_identifiers
);
criterion_main!(benches);
