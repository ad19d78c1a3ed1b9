//! Single-threaded memoization cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// A pure function wrapped in a private result cache.
///
/// `F` receives a continuation to call instead of recursing directly. The continuation
/// handed over by [`get`](Memoized::get) is the memoized function itself.
///
/// # Type Parameters
///
/// - `I`: Input type (hashable, cloned once per cache miss)
/// - `O`: Output type (cloned out of the cache on every hit)
/// - `F`: The operation, `Fn(recurse, input) -> output`
pub struct Memoized<I, O, F> {
    cache: RefCell<HashMap<I, O>>,
    operation: F,
}

impl<I, O, F> Memoized<I, O, F>
where
    I: Hash + Eq + Clone,
    O: Clone,
    F: Fn(&dyn Fn(I) -> O, I) -> O,
{
    /// Wraps a self-recursive operation.
    ///
    /// The operation must call `recurse` wherever it would call itself.
    pub fn recursive(operation: F) -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
            operation,
        }
    }

    /// Returns the output for `input`, computing it on the first request only.
    ///
    /// # Panics
    ///
    /// Overflows the stack if the recursion through `input` is cyclic.
    pub fn get(&self, input: I) -> O {
        // Fast path: already computed
        if let Some(output) = self.cache.borrow().get(&input) {
            return output.clone();
        }

        // No borrow is held while the operation recurses
        let output = (self.operation)(&|next: I| self.get(next), input.clone());

        self.cache
            .borrow_mut()
            .entry(input)
            .or_insert(output)
            .clone()
    }
}

impl<I, O, F> Memoized<I, O, F> {
    /// Number of distinct inputs computed so far.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, B, O, F> Memoized<(A, B), O, F>
where
    A: Hash + Eq + Clone,
    B: Hash + Eq + Clone,
    O: Clone,
    F: Fn(&dyn Fn((A, B)) -> O, (A, B)) -> O,
{
    /// Calls a two-argument memoized function.
    pub fn call2(&self, a: A, b: B) -> O {
        self.get((a, b))
    }
}

/// Wraps a non-recursive function in a cache.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::memo::memoize;
///
/// let square = memoize(|n: u32| n * n);
/// assert_eq!(square.get(12), 144);
/// assert_eq!(square.get(12), 144);
/// assert_eq!(square.cache_len(), 1);
/// ```
pub fn memoize<I, O>(
    function: impl Fn(I) -> O,
) -> Memoized<I, O, impl Fn(&dyn Fn(I) -> O, I) -> O>
where
    I: Hash + Eq + Clone,
    O: Clone,
{
    Memoized::recursive(move |_: &dyn Fn(I) -> O, input: I| function(input))
}

/// Wraps a self-recursive two-argument function.
///
/// Both arguments are packed into one tuple key, so the one-argument cache does all the
/// work.
pub fn memoize_recursive2<A, B, O>(
    operation: impl Fn(&dyn Fn(A, B) -> O, A, B) -> O,
) -> Memoized<(A, B), O, impl Fn(&dyn Fn((A, B)) -> O, (A, B)) -> O>
where
    A: Hash + Eq + Clone,
    B: Hash + Eq + Clone,
    O: Clone,
{
    Memoized::recursive(move |recurse: &dyn Fn((A, B)) -> O, (a, b): (A, B)| {
        operation(&|x: A, y: B| recurse((x, y)), a, b)
    })
}
