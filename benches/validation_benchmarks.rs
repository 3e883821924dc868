use std::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use markdown_validator::validate_text;

/// Generate test content with specific validation scenarios
fn generate_content(lines: usize, scenario: &str) -> String {
    let mut content = Vec::new();

    match scenario {
        "all_clean" => {
            content.push("# Benchmark document".to_string());
            for i in 0..lines {
                content.push(format!("Paragraph {} with `inline code` and text.", i));
            }
        }
        "heading_issues" => {
            for i in 0..lines {
                if i % 3 == 0 {
                    content.push(format!("##Heading {}", i)); // missing space
                } else if i % 3 == 1 {
                    content.push(format!("#### Deep heading {}", i)); // level skips
                } else {
                    content.push(format!("# Heading {} #", i)); // trailing hash
                }
            }
        }
        "link_heavy" => {
            for i in 0..lines {
                content.push(format!(
                    "See [doc {}](https://example.com/{}) and [missing][ref{}].",
                    i, i, i
                ));
            }
        }
        "mixed_structure" => {
            for i in 0..lines {
                match i % 5 {
                    0 => content.push(format!("- item {}", i)),
                    1 => content.push(format!("   - oddly indented {}", i)),
                    2 => content.push(format!("| a | b{} |", i)),
                    3 => content.push(format!("Some **bold {} text.", i)),
                    _ => content.push(String::new()),
                }
            }
        }
        _ => unreachable!("unknown scenario"),
    }

    content.join("\n")
}

fn bench_validation_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_scenarios");

    for scenario in ["all_clean", "heading_issues", "link_heavy", "mixed_structure"] {
        for lines in [100usize, 1_000] {
            let content = generate_content(lines, scenario);
            group.throughput(Throughput::Elements(lines as u64));
            group.bench_with_input(
                BenchmarkId::new(scenario, lines),
                &content,
                |b, content| {
                    b.iter(|| validate_text(black_box(content), Path::new("."), None));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_validation_scenarios);
criterion_main!(benches);
