use addonlog::fmt::{ColorFormatter, FormatTemplate, FormatValues};
use addonlog::{ConsoleOutput, Level, LogRecord};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::panic::Location;

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse(FormatTemplate::FILE);
    let values = FormatValues::new()
        .level("INFO")
        .timestamp("2025-01-15 14:30:00,123")
        .name("my_addon")
        .location("src/operators.rs:42")
        .msg("Operator finished successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_color_formatter(c: &mut Criterion) {
    let formatter = ColorFormatter::new();
    c.bench_function("ColorFormatter::format", |b| {
        b.iter(|| formatter.format(black_box(Level::Warning), black_box("low disk space")));
    });
}

fn bench_console_record(c: &mut Criterion) {
    let console = ConsoleOutput::new();
    let record = LogRecord::new(Level::Info, "my_addon", "Export done", Location::caller());

    c.bench_function("ConsoleOutput::format_record", |b| {
        b.iter(|| console.format_record(black_box(&record)));
    });
}

criterion_group!(
    benches,
    bench_format_template_render,
    bench_color_formatter,
    bench_console_record
);
criterion_main!(benches);
