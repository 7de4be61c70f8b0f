//! Background worker thread: runs the artificial delay and the generator.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The main
//! thread keeps drawing the busy overlay while the worker sleeps.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nextgen_core::{GenerationRequest, SeedPolicy, Signal, SignalGenerator};
use tracing::{debug, info};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Generate {
        request: GenerationRequest,
        delay: Duration,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Generated {
        signals: Vec<Signal>,
        elapsed_ms: u64,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    seed: SeedPolicy,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("nextgen-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, seed);
        })
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, seed: SeedPolicy) {
    let mut generator = SignalGenerator::new(seed);
    info!(seeded = seed.seed().is_some(), "worker started");

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Generate { request, delay }) => {
                let started = Instant::now();
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let signals = generator.generate(&request);
                let elapsed_ms = started.elapsed().as_millis() as u64;
                debug!(survivors = signals.len(), elapsed_ms, "batch ready");
                if tx.send(WorkerResponse::Generated { signals, elapsed_ms }).is_err() {
                    break;
                }
            }
        }
    }

    info!("worker stopped");
}
