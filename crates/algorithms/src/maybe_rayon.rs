/// Parallel iteration when the `parallel` feature is on, plain iteration otherwise.
///
/// Pixel loops are written against rayon's `into_par_iter()`. Without the
/// feature (single-threaded or WASM targets) the shim below maps that call
/// onto `into_iter()`, so `.map()` and `.collect()` resolve to `Iterator`.
#[cfg(feature = "parallel")]
pub use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
mod sequential {
    /// Sequential stand-in for `rayon::prelude::IntoParallelIterator`.
    pub trait IntoParallelIterator {
        type Iter;
        type Item;
        fn into_par_iter(self) -> Self::Iter;
    }

    impl<I: IntoIterator> IntoParallelIterator for I {
        type Iter = I::IntoIter;
        type Item = I::Item;
        fn into_par_iter(self) -> Self::Iter {
            self.into_iter()
        }
    }
}

#[cfg(not(feature = "parallel"))]
pub use sequential::*;
