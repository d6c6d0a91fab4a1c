use std::io;
use std::sync::{Arc, Mutex};

use bintree::BinaryTree;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;

/// Collects everything the fmt layer writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logged(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(LevelFilter::TRACE)
        .with_span_events(FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn add_reports_direction_and_depth() {
    let mut tree: BinaryTree<i32> = [10, 15].into_iter().collect();

    let left = logged(|| tree.add(5));
    let right = logged(|| tree.add(20));

    assert!(left.contains("direction=\"left\""), "{}", left);
    assert!(left.contains("depth=1"), "{}", left);
    assert!(right.contains("direction=\"right\""), "{}", right);
    assert!(right.contains("depth=2"), "{}", right);
}

#[test]
fn add_and_remove_open_spans() {
    let mut tree = BinaryTree::<i32>::new();

    let output = logged(|| {
        tree.add(1);
        tree.remove(&1);
    });

    let closed: Vec<_> = output.lines().filter(|line| line.contains("close")).collect();
    assert!(closed.iter().any(|line| line.contains("add")), "{}", output);
    assert!(closed.iter().any(|line| line.contains("remove")), "{}", output);
}

#[test]
fn remove_reports_count() {
    let mut tree: BinaryTree<i32> = [3, 3, 3].into_iter().collect();

    let output = logged(|| tree.remove(&3));

    assert!(output.contains("removed=3"), "{}", output);
}
