use crate::*;

/// index of the first entry at or after `from` whose key differs from
/// `from`'s key, `entries.len()` if the run extends to the end.
///
/// this linear "skip the rest of the run" scan is the batching mechanism:
/// queues are insertion ordered, not sorted, and insertion order tends to
/// group identical materials already. O(n) per frame, no sorting overhead,
/// at the cost of not merging runs separated by other keys.
pub fn skip_run<K: PartialEq>(
  entries: &[QueueEntry],
  from: usize,
  key: impl Fn(&QueueEntry) -> K,
) -> usize {
  let current = key(&entries[from]);
  let mut index = from + 1;
  while index < entries.len() {
    if key(&entries[index]) != current {
      break;
    }
    index += 1;
  }
  index
}

pub fn skip_shader_run(entries: &[QueueEntry], from: usize) -> usize {
  skip_run(entries, from, |entry| entry.shader_uid())
}

pub fn skip_vbo_run(entries: &[QueueEntry], from: usize) -> usize {
  skip_run(entries, from, |entry| entry.vbo)
}
