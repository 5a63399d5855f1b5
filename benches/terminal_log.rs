use codefolio::core::app::{App, AppSettings};
use codefolio::core::builtin_documents::DocumentCatalog;
use codefolio::core::terminal_log::{LogSink, TerminalLog};
use codefolio::core::theme_mode::{MemoryThemeStore, ThemeMode};
use codefolio::ui::renderer::ui;
use codefolio::ui::theme::Theme;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::backend::TestBackend;
use ratatui::prelude::Size;
use ratatui::Terminal;
use std::path::PathBuf;

const LINE: &str = "📄 Switched to style.css (CSS)";

fn filled_log(n: usize) -> TerminalLog {
    let mut log = TerminalLog::new();
    for _ in 0..n {
        log.log(LINE);
    }
    log
}

fn bench_app(lines: usize) -> App {
    let documents = DocumentCatalog::builtin().expect("builtin documents");
    let mut app = App::new(
        documents,
        Box::new(MemoryThemeStore::default()),
        AppSettings {
            compact_width: 80,
            download_dir: PathBuf::from("."),
        },
    );
    app.bootstrap(Size::new(120, 40));
    app.terminal = filled_log(lines);
    app
}

fn bench_terminal_log(c: &mut Criterion) {
    let theme = Theme::for_mode(ThemeMode::Dark);

    for &lines in &[100usize, 5_000usize] {
        let mut group = c.benchmark_group(format!("terminal_log_lines{lines}"));
        group.throughput(Throughput::Elements(lines as u64));

        group.bench_function(BenchmarkId::new("append", lines), |b| {
            b.iter(|| filled_log(lines))
        });

        // Full frame with a long log; only the visible tail should cost anything.
        let mut app = bench_app(lines);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        group.bench_function(BenchmarkId::new("draw_frame", lines), |b| {
            b.iter(|| {
                terminal
                    .draw(|f| ui(f, &mut app, &theme))
                    .expect("draw");
            })
        });

        // Scrolled back half way.
        let mut scrolled = bench_app(lines);
        scrolled.terminal.scroll_up(lines / 2);
        group.bench_function(BenchmarkId::new("draw_scrolled", lines), |b| {
            b.iter(|| {
                terminal
                    .draw(|f| ui(f, &mut scrolled, &theme))
                    .expect("draw");
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_terminal_log);
criterion_main!(benches);
