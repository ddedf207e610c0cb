use std::time::{Duration, Instant};

use clap::{value_t, App, Arg};
use log::{info, LevelFilter};
use pqlib::{by_sign, BinaryHeap, Comparator, HeapBuilder};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("pq-speed: {e}");
        std::process::exit(1);
    }
}

struct Limits {
    max_capacity: usize,
    max_times: usize,
}

fn run_main() -> pqlib::Result<()> {
    let matches = App::new("pq-speed")
        .about("Times runs of inserts and polls on the priority queue")
        .arg(
            Arg::with_name("max-capacity")
                .long("max-capacity")
                .short("c")
                .takes_value(true)
                .default_value("1023")
                .help("largest initial capacity to time, capacities go 1, 3, 7, ..."),
        )
        .arg(
            Arg::with_name("max-times")
                .long("max-times")
                .short("t")
                .takes_value(true)
                .default_value("10000")
                .help("largest number of runs per measurement, run counts go 100, 1000, ..."),
        )
        .arg(Arg::with_name("verbose").long("verbose").short("v"))
        .get_matches();

    let limits = Limits {
        max_capacity: value_t!(matches, "max-capacity", usize).unwrap_or_else(|e| e.exit()),
        max_times: value_t!(matches, "max-times", usize).unwrap_or_else(|e| e.exit()),
    };
    let level = if matches.is_present("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("logger not installed: {e}");
    }
    info!("max capacity {}, max runs {}", limits.max_capacity, limits.max_times);

    let mut capacity = 1;
    while capacity <= limits.max_capacity {
        time_capacity(capacity, &limits)?;
        let Some(next) = next_capacity(capacity) else {
            break;
        };
        capacity = next;
    }

    println!();
    println!("Runs of 31 inserts and 31 polls with fixed capacity of 31, custom (but simple) comparison function");
    let mut times = 100;
    while times <= limits.max_times.saturating_mul(100) {
        let mut pq = BinaryHeap::with_capacity_and_comparator(31, by_sign(|a: &f64, b: &f64| b - a))?;
        let elapsed = time_runs(&mut pq, times, 31)?;
        report(times, 31, elapsed);
        let Some(next) = next_run_count(times) else {
            break;
        };
        times = next;
    }
    Ok(())
}

fn time_capacity(capacity: usize, limits: &Limits) -> pqlib::Result<()> {
    let max_elements = capacity.saturating_mul(5).saturating_add(1000);
    let mut elements = 3;
    while elements <= max_elements {
        if elements <= capacity {
            println!("Runs of {elements} inserts and polls with fixed capacity of {capacity}");
            let mut times = 100;
            while times <= limits.max_times {
                let mut pq: BinaryHeap<f64> = BinaryHeap::with_capacity(capacity)?;
                let elapsed = time_runs(&mut pq, times, elements)?;
                report(times, elements, elapsed);
                let Some(next) = next_run_count(times) else {
                    break;
                };
                times = next;
            }
        }

        println!("Runs of {elements} inserts and polls with initial capacity of {capacity}");
        let mut times = 100;
        while times <= limits.max_times {
            let mut pq: BinaryHeap<f64> = HeapBuilder::new().capacity(capacity).allow_grow(true).build()?;
            let elapsed = time_runs(&mut pq, times, elements)?;
            report(times, elements, elapsed);
            let Some(next) = next_run_count(times) else {
                break;
            };
            times = next;
        }

        let Some(next) = next_element_count(elements) else {
            break;
        };
        elements = next;
    }
    Ok(())
}

fn time_runs<C: Comparator<f64>>(pq: &mut BinaryHeap<f64, C>, times: usize, elements: usize) -> pqlib::Result<Duration> {
    let start = Instant::now();
    for _ in 0..times {
        for _ in 0..elements {
            pq.insert(rand::random::<f64>())?;
        }
        for _ in 0..elements {
            pq.poll();
        }
    }
    Ok(start.elapsed())
}

fn next_capacity(capacity: usize) -> Option<usize> {
    capacity.checked_mul(2)?.checked_add(1)
}

fn next_run_count(times: usize) -> Option<usize> {
    times.checked_mul(10)
}

// the cast saturates, so stop once the count no longer moves
fn next_element_count(elements: usize) -> Option<usize> {
    let next = (elements as f64 * 1.35) as usize;
    (next > elements).then_some(next)
}

fn report(times: usize, elements: usize, elapsed: Duration) {
    println!("{times} runs of {elements} inserts and {elements} polls: {elapsed:?}");
}

#[test]
fn step_sequences() {
    assert_eq!(next_capacity(1), Some(3));
    assert_eq!(next_capacity(1023), Some(2047));
    assert_eq!(next_run_count(100), Some(1000));
    assert_eq!(next_element_count(3), Some(4));
    assert_eq!(next_element_count(100), Some(135));
}

#[test]
fn step_sequences_stop_on_overflow() {
    assert_eq!(next_capacity(usize::MAX), None);
    assert_eq!(next_capacity(usize::MAX >> 1), Some(usize::MAX));
    assert_eq!(next_run_count(usize::MAX / 5), None);
    assert_eq!(next_element_count(usize::MAX), None);
}
