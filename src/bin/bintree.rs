use bintree::{BinaryTree, OrderViolation};
use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Which traversal(s) to print.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Pre,
    In,
    Post,
    Level,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(about = "Build a binary search tree from the command line and print its traversals")]
struct Args {
    /// Values to add, in order. Repeat the flag or separate values with commas.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    add: Vec<i64>,

    /// Values to remove after adding. Every copy of each is removed.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    remove: Vec<i64>,

    /// Traversal to print, or all of them
    #[arg(long, value_enum, default_value_t = Order::All)]
    order: Order,

    /// Check the ordering invariant and fail if it is broken
    #[arg(long)]
    verify: bool,

    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("tree is out of order: {0}")]
    Order(#[from] OrderViolation),
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut tree: BinaryTree<i64> = args.add.iter().copied().collect();
    for value in &args.remove {
        tree.remove(value);
    }

    if args.verify {
        tree.verify()?;
    }

    for (order, values) in traversals(&tree, args.order) {
        println!("{:?}: {}", order, join(&values));
    }

    println!("size: {}", tree.size());
    println!("height: {}", tree.height());
    println!("{}", tree);
    Ok(())
}

/// The requested traversal, or every traversal in pre, in, post, level order for `Order::All`.
fn traversals(tree: &BinaryTree<i64>, order: Order) -> Vec<(Order, Vec<&i64>)> {
    let selected: &[Order] = match order {
        Order::All => &[Order::Pre, Order::In, Order::Post, Order::Level],
        _ => std::slice::from_ref(&order),
    };

    selected
        .iter()
        .map(|&order| {
            let values = match order {
                Order::Pre => tree.pre_order(),
                Order::In => tree.in_order(),
                Order::Post => tree.post_order(),
                Order::Level => tree.level_order(),
                Order::All => unreachable!("`All` expands to the single orders"),
            };
            (order, values)
        })
        .collect()
}

fn join(values: &[&i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?filter, "logging initialized");
}
