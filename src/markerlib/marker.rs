const ALPHABET: usize = 256;

/// Presence flags for every possible byte value.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    seen: bit_set::BitSet,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self {
            seen: bit_set::BitSet::with_capacity(ALPHABET),
        }
    }

    /// Marks `byte` as seen, returning false if it was already marked.
    pub fn mark(&mut self, byte: u8) -> bool {
        self.seen.insert(byte as usize)
    }

    pub fn is_marked(&self, byte: u8) -> bool {
        self.seen.contains(byte as usize)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-value occurrence counts for a window that slides one byte at a time.
///
/// `repeated` is the number of byte values currently occurring more than
/// once, so the window is duplicate-free exactly when it is zero.
#[derive(Debug, Clone)]
pub struct OccurrenceCounts {
    counts: [usize; ALPHABET],
    repeated: usize,
}

impl OccurrenceCounts {
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET],
            repeated: 0,
        }
    }

    pub fn add(&mut self, byte: u8) {
        let count = &mut self.counts[byte as usize];
        *count += 1;
        if *count == 2 {
            self.repeated += 1;
        }
    }

    /// Removes one occurrence of `byte`; the byte must have been added.
    pub fn remove(&mut self, byte: u8) {
        let count = &mut self.counts[byte as usize];
        debug_assert!(*count > 0, "removing byte {} that is not in the window", byte);
        if *count == 2 {
            self.repeated -= 1;
        }
        *count = count.saturating_sub(1);
    }

    pub fn has_duplicates(&self) -> bool {
        self.repeated > 0
    }
}

impl Default for OccurrenceCounts {
    fn default() -> Self {
        Self::new()
    }
}
