//! supermarket — console front end for the rust_cq checkout simulation.
//!
//! Runs a store with a configurable number of lanes: customers arrive in
//! random batches, fill baskets from a shared inventory, and queue at
//! checkout lanes (VIPs in a priority sub-queue, small baskets at the
//! express lane).  Prints a per-tick event log and a final summary.
//!
//! ```console
//! $ supermarket --customers 30
//! $ supermarket --customers 100 --seed 7 --delay-ms 500
//! $ supermarket --customers 500 --quiet --output-dir ./out
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cq_core::{LaneId, SimConfig, Tick};
use cq_lane::{CheckoutLane, ServiceRecord};
use cq_output::{CsvWriter, SimOutputObserver};
use cq_sim::{
    ArrivalEvent, NoPacer, Phase, Sim, SimBuilder, SimObserver, SimSummary, SleepPacer,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "supermarket", about = "Discrete-time checkout-queue simulation")]
struct Cli {
    /// Number of customers to admit before the store stops accepting arrivals.
    #[arg(long, short = 'c')]
    customers: u64,

    /// RNG seed; identical seeds reproduce identical runs.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of checkout lanes (lane 1 is the express lane).
    #[arg(long, default_value_t = 3)]
    lanes: u16,

    /// Pause between ticks, in milliseconds, for human-readable pacing.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Abort if the run has not drained within this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Also write service_log.csv and lane_summaries.csv to this directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Suppress the per-event console log (the final summary still prints).
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn to_config(&self) -> SimConfig {
        let mut cfg = SimConfig::with_target(self.customers, self.seed);
        cfg.lane_count = self.lanes;
        cfg.max_ticks = self.max_ticks;
        cfg
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints the per-tick event log: tick headers, arrivals with routing
/// decisions and queue state, completions, restock notices.  Lane numbers
/// are 1-based in output; internally ids are 0-based.
struct ConsoleObserver {
    quiet: bool,
}

fn lane_no(lane: LaneId) -> u16 {
    lane.0 + 1
}

fn fmt_ids(ids: &[cq_core::CustomerId]) -> String {
    let names: Vec<String> = ids.iter().map(|id| id.0.to_string()).collect();
    names.join(" ")
}

impl SimObserver for ConsoleObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if !self.quiet {
            println!("\n[sim] tick {tick}");
        }
    }

    fn on_arrival(&mut self, event: &ArrivalEvent, lane: &CheckoutLane) {
        if self.quiet {
            return;
        }
        let who = if event.priority { "VIP customer" } else { "customer" };
        let destination = if event.express {
            "express checkout".to_string()
        } else {
            format!("lane {}", lane_no(event.lane))
        };
        println!(
            "  {who} {} arrived with {} item(s) -> {destination}",
            event.customer.0, event.items
        );
        let (vip, regular) = lane.queued_ids();
        println!(
            "    lane {} state | vip: [{}] regular: [{}]",
            lane_no(event.lane),
            fmt_ids(&vip),
            fmt_ids(&regular)
        );
    }

    fn on_served(&mut self, _tick: Tick, lane: LaneId, record: &ServiceRecord) {
        if !self.quiet {
            println!(
                "  lane {}: served customer {} (waited {} tick(s), {} item(s))",
                lane_no(lane),
                record.customer.0,
                record.waited,
                record.items
            );
        }
    }

    fn on_restock(&mut self, _tick: Tick, amount: u32) {
        if !self.quiet {
            println!("  [inventory] all items restocked (+{amount} each)");
        }
    }

    fn on_phase(&mut self, tick: Tick, phase: Phase) {
        if self.quiet {
            return;
        }
        match phase {
            Phase::Draining => println!("  [sim] admission target reached at {tick}; draining lanes"),
            Phase::Terminated => println!("  [sim] all lanes idle at {tick}"),
            Phase::Running => {}
        }
    }
}

// ── Tee: console + optional CSV ───────────────────────────────────────────────

struct TeeObserver {
    console: ConsoleObserver,
    csv: Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for TeeObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.console.on_tick_start(tick);
    }
    fn on_arrival(&mut self, event: &ArrivalEvent, lane: &CheckoutLane) {
        self.console.on_arrival(event, lane);
    }
    fn on_served(&mut self, tick: Tick, lane: LaneId, record: &ServiceRecord) {
        self.console.on_served(tick, lane, record);
        if let Some(csv) = &mut self.csv {
            csv.on_served(tick, lane, record);
        }
    }
    fn on_restock(&mut self, tick: Tick, amount: u32) {
        self.console.on_restock(tick, amount);
    }
    fn on_phase(&mut self, tick: Tick, phase: Phase) {
        self.console.on_phase(tick, phase);
    }
    fn on_sim_end(&mut self, final_tick: Tick, summary: &SimSummary) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(final_tick, summary);
        }
    }
}

// ── Summary printing ──────────────────────────────────────────────────────────

fn print_summary(summary: &SimSummary) {
    println!("\n[summary] simulation complete at {}", summary.final_tick);
    println!("{:<8} {:>10} {:>14} {:>8}", "Lane", "Customers", "Avg wait (t)", "Items");
    println!("{}", "-".repeat(44));
    for lane in &summary.lanes {
        println!(
            "{:<8} {:>10} {:>14} {:>8}",
            lane_no(lane.lane),
            lane.customers_served,
            lane.average_wait,
            lane.items_served
        );
    }
    println!("{}", "-".repeat(44));
    println!(
        "{:<8} {:>10} {:>14} {:>8}",
        "Total", summary.total_customers, "", summary.total_items
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    let csv = match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir).context("opening CSV output files")?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };

    let mut sim: Sim = SimBuilder::new(config).build()?;
    let mut obs = TeeObserver {
        console: ConsoleObserver { quiet: cli.quiet },
        csv,
    };

    let summary = match cli.delay_ms {
        Some(ms) => sim.run(&mut obs, &mut SleepPacer::from_millis(ms))?,
        None => sim.run(&mut obs, &mut NoPacer)?,
    };

    if let Some(csv) = &mut obs.csv {
        if let Some(e) = csv.take_error() {
            eprintln!("output error: {e}");
        }
    }

    print_summary(&summary);
    Ok(())
}
