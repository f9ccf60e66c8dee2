//! Bounded worker-pool helpers shared by the clustering and scheduling phases.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// A bounded thread pool wrapper.
///
/// Both concurrent phases of the pipeline run inside one pool so the number of
/// worker threads stays fixed regardless of how many restarts are in flight.
pub struct ThreadPool {
    inner: rayon::ThreadPool,
}

impl ThreadPool {
    /// Creates a pool with the given number of worker threads.
    pub fn new(num_threads: usize) -> Self {
        Self {
            inner: ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .expect("cannot build a thread pool"),
        }
    }

    /// Executes the given operation on the pool, blocking until it completes.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps a collection in parallel, collecting results in submission order.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().map(map_op).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_preserves_submission_order() {
        let pool = ThreadPool::new(4);
        let doubled = pool.execute(|| parallel_into_collect((0..64).collect(), |i: i32| i * 2));
        assert_eq!(doubled, (0..64).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_worker_pool() {
        let pool = ThreadPool::new(1);
        let sum: i32 = pool
            .execute(|| parallel_into_collect(vec![1, 2, 3], |i: i32| i))
            .iter()
            .sum();
        assert_eq!(sum, 6);
    }
}
