//! Key-indexed binary min-heap over city indices.

/// A priority queue holding at most one entry per city.
///
/// Entries are ordered by `(priority, city)`, so equal priorities pop the
/// lowest city index first. Updating or removing a city's entry is
/// O(log n) through a position index instead of a linear scan.
///
/// # Examples
///
/// ```
/// use u_tour::graph::IndexedMinQueue;
///
/// let mut queue = IndexedMinQueue::new(4);
/// queue.push_or_update(2, 5.0);
/// queue.push_or_update(1, 5.0);
/// queue.push_or_update(3, 1.0);
/// queue.push_or_update(3, 9.0);
/// assert_eq!(queue.pop(), Some((1, 5.0)));
/// assert_eq!(queue.pop(), Some((2, 5.0)));
/// assert_eq!(queue.pop(), Some((3, 9.0)));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinQueue {
    heap: Vec<usize>,
    keys: Vec<f64>,
    position: Vec<Option<usize>>,
}

impl IndexedMinQueue {
    /// Creates an empty queue for cities `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            keys: vec![f64::INFINITY; capacity],
            position: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, city: usize) -> bool {
        self.position[city].is_some()
    }

    /// Current priority of `city`, if queued.
    pub fn priority(&self, city: usize) -> Option<f64> {
        self.position[city].map(|_| self.keys[city])
    }

    /// Inserts `city`, or replaces its priority if it is already queued.
    pub fn push_or_update(&mut self, city: usize, priority: f64) {
        self.keys[city] = priority;
        match self.position[city] {
            Some(i) => {
                let i = self.sift_up(i);
                self.sift_down(i);
            }
            None => {
                self.heap.push(city);
                let i = self.heap.len() - 1;
                self.position[city] = Some(i);
                self.sift_up(i);
            }
        }
    }

    /// Removes `city` from the queue, returning its priority if it was queued.
    pub fn remove(&mut self, city: usize) -> Option<f64> {
        let i = self.position[city]?;
        let last = self.heap.len() - 1;
        self.swap(i, last);
        self.heap.pop();
        self.position[city] = None;
        if i < self.heap.len() {
            let i = self.sift_up(i);
            self.sift_down(i);
        }
        Some(self.keys[city])
    }

    /// Removes and returns the lowest `(city, priority)` entry.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        let city = *self.heap.first()?;
        self.remove(city).map(|priority| (city, priority))
    }

    /// Returns the lowest entry without removing it.
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.first().map(|&city| (city, self.keys[city]))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ca, cb) = (self.heap[a], self.heap[b]);
        self.keys[ca]
            .total_cmp(&self.keys[cb])
            .then(ca.cmp(&cb))
            .is_lt()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
