use crate::error::ScanError;
use crate::marker::{MarkerSet, OccurrenceCounts};

/// How candidate windows are checked for repeated bytes.
#[derive(clap::ValueEnum, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Strategy {
    /// Test every window from scratch against a cleared marker set.
    #[default]
    Rescan,
    /// Carry occurrence counts from one window to the next.
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScanner {
    size: usize,
    strategy: Strategy,
}

impl WindowScanner {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the end position of the first window of `size` bytes that
    /// holds no repeated value.
    ///
    /// A zero-sized window is trivially duplicate-free, so a scanner of size
    /// 0 finds position 0 in any input.
    pub fn find_first_unique_window(&self, input: &[u8]) -> Result<usize, ScanError> {
        log::trace!(
            "scanning {} bytes for a {}-byte window using {:?}",
            input.len(),
            self.size,
            self.strategy
        );
        let found = match self.strategy {
            Strategy::Rescan => rescan(input, self.size),
            Strategy::Sliding => slide(input, self.size),
        };
        match found {
            Some(position) => {
                log::debug!("found unique window ending at {}", position);
                Ok(position)
            }
            None => Err(ScanError::NotFound {
                size: self.size,
                len: input.len(),
            }),
        }
    }
}

pub fn find_first_unique_window(input: &[u8], size: usize) -> Result<usize, ScanError> {
    WindowScanner::new(size).find_first_unique_window(input)
}

pub fn has_duplicates(window: &[u8]) -> bool {
    !marks_all_unique(window, &mut MarkerSet::new())
}

fn marks_all_unique(window: &[u8], markers: &mut MarkerSet) -> bool {
    window.iter().all(|b| markers.mark(*b))
}

fn rescan(input: &[u8], size: usize) -> Option<usize> {
    let last_start = input.len().checked_sub(size)?;
    let mut markers = MarkerSet::new();
    (0..=last_start).find_map(|start| {
        markers.clear();
        if marks_all_unique(&input[start..start + size], &mut markers) {
            Some(start + size)
        } else {
            None
        }
    })
}

fn slide(input: &[u8], size: usize) -> Option<usize> {
    if size > input.len() {
        return None;
    }
    let mut counts = OccurrenceCounts::new();
    for b in &input[..size] {
        counts.add(*b);
    }
    if !counts.has_duplicates() {
        return Some(size);
    }
    for end in size..input.len() {
        counts.add(input[end]);
        counts.remove(input[end - size]);
        if !counts.has_duplicates() {
            return Some(end + 1);
        }
    }
    None
}
