//! `tl-writer` — per-run tick logging.
//!
//! | Piece                  | Role                                                  |
//! |------------------------|-------------------------------------------------------|
//! | [`alloc`]              | Run IDs that survive restarts when logging to disk    |
//! | [`TickWriter`]         | open / write_config / write_tick / close              |
//! | [`FileTickWriter`]     | `sim_<id>/config.xml` + `sim_<id>/ticks.jsonl`        |
//! | [`NullTickWriter`]     | Discards everything, never fails                      |
//! | [`TickWriterAdapter`]  | `tl_sim::TickListener` → `TickWriter`, swallows errors |
//! | [`reader`]             | Read a run directory back                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tl_writer::{allocate, select_writer, TickWriter, TickWriterAdapter};
//!
//! let id = allocate(&config.log_root, config.write_ticks)?;
//! let writer = Arc::new(Mutex::new(select_writer(&config)));
//! {
//!     let mut w = writer.lock().unwrap();
//!     w.open(id)?;
//!     w.write_config(id, &xml)?;
//! }
//! ctl.add_listener(id, Box::new(TickWriterAdapter::new(writer.clone())))?;
//! ctl.run_ticks(id, 100)?;
//! writer.lock().unwrap().close()?;
//! ```

pub mod adapter;
pub mod alloc;
pub mod error;
pub mod file;
pub mod layout;
pub mod null;
pub mod reader;
pub mod writer;


pub use adapter::TickWriterAdapter;
pub use alloc::{allocate, allocate_claimed, IdAllocator};
pub use error::{TickLogError, TickLogResult};
pub use file::FileTickWriter;
pub use null::NullTickWriter;
pub use reader::{list_runs, read_run, RunLog};
pub use writer::{select_writer, TickWriter};
