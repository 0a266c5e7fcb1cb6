/*
 * Copyright 2025 by Feldspar Contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! The worker pool handed to every parallel entry point.
//!
//! The core owns no global pool: callers construct one, pass it by
//! reference, and shut it down between phases so sequential measurements
//! are not depressed by idle workers. Workers never take locks; parallel
//! regions write to disjoint output slots and the caller reduces.

use rayon::{Scope, ThreadPool, ThreadPoolBuilder};

/// A fixed-size work-stealing worker set.
pub struct TaskPool {
	pool: ThreadPool,
}

impl TaskPool {
	/// Builds a pool with `n_threads` workers (0 picks the logical core
	/// count). Creation after a previous pool was shut down is legal.
	pub fn new(n_threads: usize) -> Self {
		let pool = ThreadPoolBuilder::new()
			.num_threads(n_threads)
			.build()
			.expect("worker pool construction cannot fail with these settings");
		Self { pool }
	}

	pub fn thread_count(&self) -> usize {
		self.pool.current_num_threads()
	}

	/// Fire-and-forget task on the pool. Completion is only observable
	/// through the work itself; batch code uses [`Self::sync_scope`]
	/// instead so results have a happens-before edge.
	pub fn spawn<F>(&self, f: F)
	where
		F: FnOnce() + Send + 'static,
	{
		self.pool.spawn(f);
	}

	/// Runs `f` with a scope in which tasks may be spawned; every spawned
	/// task completes before this returns. This is the only suspension
	/// point the crate uses.
	pub fn sync_scope<'scope, F, R>(&self, f: F) -> R
	where
		F: for<'s> FnOnce(&'s Scope<'scope>) -> R + Send,
		R: Send,
	{
		self.pool.in_place_scope(f)
	}

	/// Splits `items` into roughly per-worker chunks and runs `f` on each
	/// `(chunk_index, chunk)` concurrently.
	pub fn parallel_for_chunks<T, F>(&self, items: &[T], f: F)
	where
		T: Sync,
		F: Fn(usize, &[T]) + Send + Sync,
	{
		let workers = self.thread_count().max(1);
		let chunk = items.len().div_ceil(workers).max(1);
		self.sync_scope(|s| {
			for (i, part) in items.chunks(chunk).enumerate() {
				let f = &f;
				s.spawn(move |_| f(i, part));
			}
		});
	}

	/// Tears the pool down, joining every worker thread. Dropping does the
	/// same; the explicit form documents phase boundaries at call sites.
	pub fn shutdown(self) {
		drop(self);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn scope_completes_all_tasks() {
		let pool = TaskPool::new(4);
		let counter = AtomicUsize::new(0);
		pool.sync_scope(|s| {
			for _ in 0..100 {
				let c = &counter;
				s.spawn(move |_| {
					c.fetch_add(1, Ordering::Relaxed);
				});
			}
		});
		assert_eq!(counter.load(Ordering::Relaxed), 100);
		pool.shutdown();
	}

	#[test]
	fn chunks_cover_input_disjointly() {
		let pool = TaskPool::new(3);
		let items: Vec<usize> = (0..1000).collect();
		let sum = AtomicUsize::new(0);
		pool.parallel_for_chunks(&items, |_, part| {
			let s: usize = part.iter().sum();
			sum.fetch_add(s, Ordering::Relaxed);
		});
		assert_eq!(sum.load(Ordering::Relaxed), 1000 * 999 / 2);
	}

	#[test]
	fn detached_spawn_runs() {
		let pool = TaskPool::new(2);
		let (tx, rx) = std::sync::mpsc::channel();
		pool.spawn(move || {
			tx.send(42u32).expect("receiver alive");
		});
		assert_eq!(rx.recv().expect("task ran"), 42);
		pool.shutdown();
	}

	#[test]
	fn recreate_after_shutdown() {
		let pool = TaskPool::new(2);
		pool.shutdown();
		let pool = TaskPool::new(2);
		assert!(pool.thread_count() >= 1);
	}
}
