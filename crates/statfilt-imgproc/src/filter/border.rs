/// Mirrored index lookup for one image axis.
///
/// Only the out-of-bounds ranges `[-offset, -1]` and `[len, len + offset - 1]`
/// are stored, with `offset = window_len / 2`. Both ranges are reflected by a
/// fixed displacement of `window_len - 1` positions:
///
/// - `i < 0` maps to `i + (window_len - 1)`
/// - `i >= len` maps to `i - (window_len - 1)`
///
/// Example with `window_len = 5` on an axis of length 6:
///
/// ```text
/// index:  -2 -1 | 0 1 2 3 4 5 | 6 7
/// maps:    2  3 | 0 1 2 3 4 5 | 2 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorIndex {
    len: usize,
    // before[k] holds the mapping of index -(k + 1)
    before: Vec<usize>,
    // after[k] holds the mapping of index len + k
    after: Vec<usize>,
}

impl MirrorIndex {
    /// Build the lookup tables for an axis of length `len`.
    ///
    /// # Arguments
    ///
    /// * `len` - The length of the axis in pixels.
    /// * `window_len` - The odd window length, at least 3.
    ///
    /// # Returns
    ///
    /// `None` if `len < window_len - 1`, in which case some mirrored index
    /// would fall outside the axis.
    ///
    /// # Example
    ///
    /// ```
    /// use statfilt_imgproc::filter::MirrorIndex;
    ///
    /// let mirror = MirrorIndex::new(5, 3).unwrap();
    ///
    /// assert_eq!(mirror.map(-1), 1);
    /// assert_eq!(mirror.map(2), 2);
    /// assert_eq!(mirror.map(5), 3);
    /// ```
    pub fn new(len: usize, window_len: usize) -> Option<Self> {
        let displacement = window_len.checked_sub(1)?;
        if len < displacement {
            return None;
        }

        let offset = window_len / 2;
        let before = (1..=offset).map(|k| displacement - k).collect();
        let after = (0..offset).map(|k| len + k - displacement).collect();

        Some(Self { len, before, after })
    }

    /// The length of the axis.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the axis has no pixels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map a possibly out-of-bounds index to an index inside the axis.
    ///
    /// PRECONDITION: `i` is at most `offset` positions outside `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if the precondition is violated.
    #[inline]
    pub fn map(&self, i: isize) -> usize {
        if i < 0 {
            self.before[i.unsigned_abs() - 1]
        } else if i as usize >= self.len {
            self.after[i as usize - self.len]
        } else {
            i as usize
        }
    }
}
