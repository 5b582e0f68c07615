// Copyright 2025 the Mapstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=mapstory_timing --heading-base-level=0

//! Mapstory Timing: host-agnostic timer queue primitives.
//!
//! This crate provides a tiny, clock-less timer queue for interactions that
//! need delayed, cancellable callbacks (debouncing, gesture timeouts) without
//! depending on any particular event loop. It focuses on:
//! - Scheduling payloads against millisecond deadlines.
//! - Cancelling or moving a scheduled entry through its [`TimerId`].
//! - Draining due entries in deadline order once the host advances time.
//!
//! The queue never reads a clock. Callers pass timestamps in, typically from
//! the event that caused the scheduling and from the host's frame or timer
//! callback that drives [`TimerQueue::pop_due`].
//!
//! ## Minimal example
//!
//! ```rust
//! use mapstory_timing::TimerQueue;
//!
//! #[derive(Debug, PartialEq)]
//! enum Task {
//!     Commit,
//!     ReleaseHint,
//! }
//!
//! let mut timers = TimerQueue::new();
//! let commit = timers.schedule(80, Task::Commit);
//! timers.schedule(400, Task::ReleaseHint);
//!
//! // A newer event replaces the pending commit.
//! assert_eq!(timers.cancel(commit), Some(Task::Commit));
//! timers.schedule(120, Task::Commit);
//!
//! assert_eq!(timers.pop_due(100), None);
//! assert_eq!(timers.pop_due(120).map(|(_, t)| t), Some(Task::Commit));
//! assert_eq!(timers.next_deadline(), Some(400));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod queue;

pub use queue::{TimerId, TimerQueue};
