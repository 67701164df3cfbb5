// Parallel batch evaluation for Commander Core
//
// Rayon doesn't work in WASM without native threads, so the wasm32 build
// falls back to sequential iteration. Both paths keep input order.

/// Map `f` over `items`, in parallel on native targets.
#[inline]
pub fn parallel_map<T, F, U>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    F: Fn(&T) -> U + Sync + Send,
    U: Send,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native: Use Rayon
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }

    #[cfg(target_arch = "wasm32")]
    {
        // WASM: Sequential
        items.iter().map(f).collect()
    }
}
