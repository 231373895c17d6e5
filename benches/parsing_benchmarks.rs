use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use survey_ships::validation::{is_valid_ship_instruction, is_valid_ship_start};
use survey_ships::{ValidationLimits, parse_lines};

/// Generate an instruction file with the given number of ships
fn generate_instructions(ships: usize, pattern: &str) -> String {
    let mut content = String::from("5 5\n");
    let moves = ["LFRFF", "FFRFF", "RRFLLF", "FLFLFRFRF"];

    for i in 0..ships {
        match pattern {
            "malformed" if i % 3 == 0 => {
                content.push_str(&format!("{} {} X\n", i % 10, (i / 10) % 10));
            }
            "grouped" if i % 2 == 0 => {
                content.push('\n');
                content.push_str(&format!("{} {} S\n", i % 10, (i / 10) % 10));
            }
            _ => {
                content.push_str(&format!("{} {} N\n", i % 10, (i / 10) % 10));
            }
        }
        content.push_str(moves[i % moves.len()]);
        content.push('\n');
    }

    content
}

/// Benchmark the record validators on single lines
fn bench_validators(c: &mut Criterion) {
    let limits = ValidationLimits::default();
    let long_instruction = "LFR".repeat(33);

    let mut group = c.benchmark_group("validators");

    group.bench_function("ship_start", |b| {
        b.iter(|| black_box(is_valid_ship_start(black_box("1 2 N"), &limits)))
    });
    group.bench_function("ship_instruction_short", |b| {
        b.iter(|| black_box(is_valid_ship_instruction(black_box("LFRFF"), &limits)))
    });
    group.bench_function("ship_instruction_max_len", |b| {
        b.iter(|| {
            black_box(is_valid_ship_instruction(
                black_box(&long_instruction),
                &limits,
            ))
        })
    });

    group.finish();
}

/// Benchmark parsing whole files of different sizes
fn bench_file_parsing(c: &mut Criterion) {
    let limits = ValidationLimits::default();
    let ship_counts = [100, 1_000, 10_000];
    let patterns = ["clean", "malformed", "grouped"];

    let mut group = c.benchmark_group("file_parsing");

    for &ships in &ship_counts {
        for pattern in patterns {
            let content = generate_instructions(ships, pattern);

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(pattern, ships),
                &content,
                |b, content| {
                    b.iter(|| black_box(parse_lines(black_box(content).lines(), &limits)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_validators, bench_file_parsing);
criterion_main!(benches);
