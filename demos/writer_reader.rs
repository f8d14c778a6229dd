use clap::Parser;
use spscbuf::RingBuffer;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[clap(name = "writer_reader")]
#[clap(about = "Ring buffer writer/reader example", long_about = None)]
struct Args {
    #[clap(short, long, default_value_t = 1024)]
    capacity: usize,

    #[clap(short = 'n', long, default_value_t = 256)]
    count: usize,

    #[clap(short, long, default_value_t = 50)]
    backoff_us: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!(
        capacity = args.capacity,
        count = args.count,
        "starting writer/reader demo"
    );

    let (mut producer, mut consumer) = RingBuffer::with_capacity(args.capacity)?.split();

    let count = args.count;
    let backoff = Duration::from_micros(args.backoff_us);

    let writer = thread::spawn(move || {
        let mut value = 0u8;
        let mut sent = 0;
        while sent < count {
            if producer.put(&[value]) == 1 {
                debug!(value = value, "wrote byte");
                value = value.wrapping_add(1);
                sent += 1;
            } else {
                thread::sleep(backoff);
            }
        }
        info!(bytes_written = sent, "writer finished");
    });

    let reader = thread::spawn(move || {
        let mut byte = [0u8; 1];
        let mut received = 0;
        while received < count {
            if consumer.get(&mut byte) == 1 {
                println!("---{:02x}---", byte[0]);
                received += 1;
            } else {
                thread::sleep(backoff);
            }
        }
        info!(bytes_read = received, "reader finished");
    });

    writer.join().expect("writer thread panicked");
    reader.join().expect("reader thread panicked");

    info!("demo complete");
    Ok(())
}
