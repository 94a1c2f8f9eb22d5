/// The path traced by repeatedly applying a transform until a value repeats.
///
/// `tail` holds the values visited before the cycle is entered and `cycle`
/// holds the repeating part in traversal order, starting from the first value
/// that repeats. A cycle of length one is a fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orbit<T> {
    pub tail: Vec<T>,
    pub cycle: Vec<T>,
}

impl<T> Orbit<T> {
    /// Total number of distinct values visited, tail and cycle together.
    pub fn len(&self) -> usize {
        self.tail.len() + self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_empty() && self.cycle.is_empty()
    }

    /// Number of transform applications before the first cycle value is reached.
    pub fn entry_steps(&self) -> usize {
        self.tail.len()
    }

    pub fn is_fixed_point(&self) -> bool {
        self.cycle.len() == 1
    }
}

/// Trace the orbit of `start` under `transform`.
///
/// Starting from `start`, repeatedly applies `transform` until a previously seen
/// value is produced, then splits the visited path at that value. There is no
/// step limit: the caller's state space must be finite.
///
/// # Example
///
/// ```
/// use kaprekar::sequence::trace_orbit;
///
/// // 0 → 1 → 2 → 3 → 2 (cycle between 2 and 3)
/// let orbit = trace_orbit(0, |n| if *n < 3 { n + 1 } else { 2 });
/// assert_eq!(orbit.tail, vec![0, 1]);
/// assert_eq!(orbit.cycle, vec![2, 3]);
/// ```
pub fn trace_orbit<T, F>(start: T, transform: F) -> Orbit<T>
where
    T: Eq,
    F: Fn(&T) -> T,
{
    let mut path: Vec<T> = Vec::new();
    let mut current = start;

    loop {
        if let Some(cycle_start) = path.iter().position(|x| x == &current) {
            let cycle = path.split_off(cycle_start);
            return Orbit { tail: path, cycle };
        }
        let next = transform(&current);
        path.push(current);
        current = next;
    }
}
