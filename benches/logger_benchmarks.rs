//! Criterion benchmarks for rust_slog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_slog::prelude::*;
use rust_slog::render::{write_binary, write_text, StackTrace};
use std::sync::Arc;

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new();
    logger.set_level(Level::Error);

    group.bench_function("debugf", |b| {
        b.iter(|| logger.debugf(format_args!("request {} took {}ms", black_box(42), 7)));
    });

    group.bench_function("debug_values", |b| {
        b.iter(|| logger.debug(&[&"request", &black_box(42)]));
    });

    group.bench_function("stack", |b| {
        b.iter(|| logger.stack(Level::Debug, 0, &[&"never captured"]));
    });

    group.finish();
}

fn bench_text_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sink");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::new();
    logger.set_output(Output::text(std::io::sink())).unwrap();

    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("request {} took {}ms", black_box(42), 7)));
    });

    group.bench_function("info_values", |b| {
        b.iter(|| logger.info(&[&"request", &black_box(42), &"done"]));
    });

    logger.set_file_prefix("benches/");
    group.bench_function("infof_with_prefix", |b| {
        b.iter(|| logger.infof(format_args!("request {}", black_box(42))));
    });

    logger.set_output(Output::terminal(std::io::sink())).unwrap();
    group.bench_function("terminal_infof", |b| {
        b.iter(|| logger.infof(format_args!("request {}", black_box(42))));
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    let logger = Arc::new(Logger::new());
    logger.set_output(Output::text(std::io::sink())).unwrap();

    for threads in [2usize, 4] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                let _ = logger.infof(format_args!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let bin: Vec<u8> = (0..4096u32).map(|i| i as u8).collect();
    group.throughput(Throughput::Bytes(bin.len() as u64));
    group.bench_function("hexdump_4k", |b| {
        let mut out = Vec::with_capacity(32 * 1024);
        b.iter(|| {
            out.clear();
            write_binary(&mut out, black_box(&bin))
        });
    });

    let txt = "fn main() {\r\n\tprintln!(\"hello\");\n}\n".repeat(64)
        + &"long line without breaks ".repeat(40);
    group.throughput(Throughput::Bytes(txt.len() as u64));
    group.bench_function("wrap_text", |b| {
        let mut out = Vec::with_capacity(16 * 1024);
        b.iter(|| {
            out.clear();
            write_text(&mut out, black_box(&txt))
        });
    });

    group.throughput(Throughput::Elements(1));
    group.bench_function("stack_capture", |b| {
        b.iter(|| black_box(StackTrace::capture(0)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filtered,
    bench_text_sink,
    bench_contended,
    bench_render
);
criterion_main!(benches);
