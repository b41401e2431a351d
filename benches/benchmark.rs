//! Performance benchmarks for mail-cleaner.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mail_cleaner::{clean_html, HtmlCleaner};

const NEWSLETTER_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Weekly Digest</title>
    <style>td { padding: 0; }</style>
</head>
<body>
<table width="100%">
  <tr><td></td><td><a href="https://news.example.com"><img src="logo.png" alt="Logo"></a></td><td></td></tr>
  <tr><td></td><td><a href="https://news.example.com/web">View this email in your browser</a></td><td></td></tr>
</table>
<table width="600">
  <tr><td>
    <h1>This Week in Rust</h1>
    <p>Here are the <b>three</b> stories we think you should read this week.</p>
    <ul>
      <li><a href="https://news.example.com/1">Async closures land</a></li>
      <li><a href="https://news.example.com/2">A new borrow checker</a></li>
      <li><a href="https://news.example.com/3">Faster incremental builds</a></li>
    </ul>
    <hr>
    <p>Thanks for reading.</p>
  </td></tr>
</table>
<table width="100%">
  <tr><td>Facebook</td><td>Twitter</td><td>LinkedIn</td></tr>
  <tr><td colspan="3">Copyright &copy; 2024 Example Media LLC. All rights reserved.</td></tr>
  <tr><td colspan="3"><a href="https://news.example.com/u">Unsubscribe</a> | <a href="https://news.example.com/p">Update your preferences</a></td></tr>
</table>
</body>
</html>
"#;

const QP_TEXT: &str = "Top stories for today=2C in brief:=0A\n\
=E2=80=9CRust 2024=E2=80=9D is out =E2=80=94 here=E2=80=99s what changed.=\n\
 More at https://news.example.com/?id=3D42\n\n\n\n\
Read it online: https://news.example.com/web";

fn bench_clean_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    group.throughput(Throughput::Bytes(NEWSLETTER_HTML.len() as u64));
    group.bench_function("newsletter_html", |b| {
        b.iter(|| clean_html(black_box(NEWSLETTER_HTML)));
    });
    group.finish();
}

fn bench_clean_simple(c: &mut Criterion) {
    let cleaner = HtmlCleaner::new();
    c.bench_function("clean_simple_qp", |b| {
        b.iter(|| cleaner.clean_simple(black_box(QP_TEXT)));
    });
}

fn bench_reused_cleaner(c: &mut Criterion) {
    let cleaner = HtmlCleaner::new();
    c.bench_function("clean_reused_cleaner", |b| {
        b.iter(|| cleaner.clean(black_box(NEWSLETTER_HTML)));
    });
}

criterion_group!(benches, bench_clean_html, bench_clean_simple, bench_reused_cleaner);
criterion_main!(benches);
