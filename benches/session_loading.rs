use std::fs;
use std::hint::black_box;
use std::io::Write;
use std::path::Path;

use cc_session_viewer::conversation::threads_newest_first;
use cc_session_viewer::parsers::parse_session_file;
use cc_session_viewer::{ArchiveStore, Catalog};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::{NamedTempFile, TempDir};

/// One transcript line; every fourth record is an assistant reply with content blocks
fn record_line(i: usize) -> String {
    let ts = format!("2024-01-{:02}T12:{:02}:{:02}Z", (i % 28) + 1, (i / 60) % 60, i % 60);
    if i % 4 == 3 {
        format!(
            r#"{{"type":"assistant","message":{{"role":"assistant","content":[{{"type":"text","text":"Reply {}"}},{{"type":"tool_use","id":"t{}","name":"Read","input":{{}}}}]}},"uuid":"a-{}","timestamp":"{}"}}"#,
            i, i, i, ts
        )
    } else {
        format!(
            r#"{{"type":"user","message":{{"role":"user","content":"Prompt number {}"}},"uuid":"u-{}","timestamp":"{}"}}"#,
            i, i, ts
        )
    }
}

fn write_transcript(mut out: impl Write, num_records: usize) {
    for i in 0..num_records {
        writeln!(out, "{}", record_line(i)).unwrap();
    }
}

fn generate_session_file(num_records: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write_transcript(&mut file, num_records);
    file.flush().unwrap();
    file
}

fn generate_claude_dir(projects: usize, sessions_per_project: usize, records: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for p in 0..projects {
        let project = dir.path().join("projects").join(format!("-Users-bench-project{}", p));
        fs::create_dir_all(&project).unwrap();
        for s in 0..sessions_per_project {
            let file = fs::File::create(project.join(format!("session-{}.jsonl", s))).unwrap();
            write_transcript(file, records);
        }
    }
    dir
}

fn catalog(claude_dir: &Path) -> Catalog {
    Catalog::new(claude_dir, ArchiveStore::new(claude_dir.join("archive.json")))
}

fn bench_parse_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_session_file");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let file = generate_session_file(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_session_file(black_box(file.path()), "bench", "-bench").unwrap());
        });
    }

    group.finish();
}

fn bench_thread_grouping(c: &mut Criterion) {
    let file = generate_session_file(10_000);
    let session = parse_session_file(file.path(), "bench", "-bench").unwrap();

    c.bench_function("threads_newest_first_10k", |b| {
        b.iter(|| threads_newest_first(black_box(&session.messages)));
    });
}

fn bench_catalog(c: &mut Criterion) {
    let dir = generate_claude_dir(10, 20, 200);
    let catalog = catalog(dir.path());

    let mut group = c.benchmark_group("catalog");
    group.sample_size(20);
    group.bench_function("list_projects", |b| b.iter(|| catalog.list_projects().unwrap()));
    group.bench_function("search", |b| b.iter(|| catalog.search(black_box("number 199")).unwrap()));
    group.finish();
}

criterion_group!(benches, bench_parse_session, bench_thread_grouping, bench_catalog);
criterion_main!(benches);
