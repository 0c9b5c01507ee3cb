//! burstgen simulator — headless run of the ratchet applet.
//!
//! Drives the applet with a periodic primary clock and prints the
//! trigger timeline plus a final display snapshot.
//!
//! Usage:
//!   burstgen [--ticks N] [--interval T] [--prob P] [--number IDX]
//!            [--div D] [--dist 0|1|2] [--tuplets 0|1|2] [--seed S]

use std::env;

use bg_applet::{Applet, DisplayList, DrawOp, HostIo, RatchetApplet};
use bg_core::{Dist, RandomSource, Tuplets};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct SimRandom(StdRng);

impl RandomSource for SimRandom {
    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.gen_range(lo..hi)
    }
}

/// Scripted host: a clock edge every `interval` ticks, silent CV, and
/// a pulse log in place of hardware trigger outputs.
struct SimHost {
    now: u64,
    interval: u64,
    pulses: Vec<(u64, usize)>,
    rng: SimRandom,
}

impl HostIo for SimHost {
    fn ticks(&self) -> u64 {
        self.now
    }

    fn clock(&mut self, input: usize) -> bool {
        input == 0 && self.now % self.interval == 0
    }

    fn cv(&self, _input: usize) -> i32 {
        0
    }

    fn clock_out(&mut self, channel: usize) {
        self.pulses.push((self.now, channel));
    }

    fn random(&mut self) -> &mut dyn RandomSource {
        &mut self.rng
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let ticks = flag(&args, "--ticks").unwrap_or(100_000u64);
    let interval = flag(&args, "--interval").unwrap_or(20_000u64).max(1);
    let prob = flag(&args, "--prob").unwrap_or(100i32).clamp(0, 100);
    let number_index = flag(&args, "--number").unwrap_or(4i32);
    let div = flag(&args, "--div").unwrap_or(1i32).clamp(1, 16);
    let dist = flag(&args, "--dist").unwrap_or(0i32);
    let tuplets = flag(&args, "--tuplets").unwrap_or(0i32);
    let seed = flag(&args, "--seed").unwrap_or(0u64);

    let mut applet = RatchetApplet::new();
    applet.start();
    for i in 0..2 {
        let ch = applet.engine_mut().channel_mut(i);
        ch.prob = prob;
        ch.tuplets = Tuplets::from_index(tuplets);
        ch.dist = Dist::from_index(dist);
        ch.div = div;
        ch.number_index = number_index.clamp(0, bg_core::max_index(ch.tuplets));
        ch.update_number();
    }

    println!("Applet:   {}", applet.name());
    println!("Clock:    every {} ticks", interval);
    println!(
        "Channel:  prob={} number={} div={} dist={:?} tuplets={:?}",
        prob,
        applet.engine().channel(0).number,
        div,
        applet.engine().channel(0).dist,
        applet.engine().channel(0).tuplets,
    );
    println!();

    let mut host = SimHost {
        now: 0,
        interval,
        pulses: Vec::new(),
        rng: SimRandom(StdRng::seed_from_u64(seed)),
    };

    for now in 0..ticks {
        host.now = now;
        applet.controller(&mut host);
    }

    let mut last: [Option<u64>; 2] = [None, None];
    for (tick, channel) in &host.pulses {
        match last[*channel] {
            Some(prev) => println!("tick {:>8}  out {}  (+{})", tick, channel + 1, tick - prev),
            None => println!("tick {:>8}  out {}", tick, channel + 1),
        }
        last[*channel] = Some(*tick);
    }

    println!();
    for channel in 0..2 {
        let count = host.pulses.iter().filter(|(_, c)| *c == channel).count();
        println!("out {}: {} pulses", channel + 1, count);
    }

    println!();
    println!("Display:");
    let mut display = DisplayList::new();
    applet.view(&mut display);
    for op in display.ops() {
        match op {
            DrawOp::Text { x, y, text } => println!("  ({:>2},{:>2}) {}", x, y, text),
            DrawOp::Cursor { x, y, w, solid } => {
                let style = if *solid { "solid" } else { "edit" };
                println!("  ({:>2},{:>2}) cursor w={} {}", x, y, w, style);
            }
        }
    }
}

/// Parse `--flag value`, exiting with a usage message on bad input.
fn flag<T: std::str::FromStr>(args: &[String], name: &str) -> Option<T> {
    let raw = args.iter().position(|a| a == name).and_then(|i| args.get(i + 1))?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("Invalid value for {}: {}", name, raw);
            eprintln!(
                "Usage: burstgen [--ticks N] [--interval T] [--prob P] [--number IDX] \
                 [--div D] [--dist 0|1|2] [--tuplets 0|1|2] [--seed S]"
            );
            std::process::exit(1);
        }
    }
}
