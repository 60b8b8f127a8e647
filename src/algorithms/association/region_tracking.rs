//! Cross-frame region correspondence by keypoint-match voting.
//!
//! Each keypoint match whose endpoints land inside a previous-frame and a
//! current-frame rectangle casts one vote for that region pair. The
//! current-frame counterpart of a previous region is the current region
//! with the most votes. A match votes for at most one current region — the
//! first in list order containing its current keypoint — so overlapping
//! rectangles cannot double-count a single correspondence.

use log::trace;

use crate::core::types::{CorrespondenceMap, KeypointMatch, SensorFrame};

/// Resolve region correspondences between two consecutive frames.
///
/// Returns one entry per previous-frame region that collected at least one
/// vote; a region with zero votes has no entry, and callers must treat the
/// missing key as "no counterpart this step". Ties on the vote count are
/// broken by current-frame region list order (first maximum wins), so the
/// result is deterministic for a given input.
pub fn track_regions(
    matches: &[KeypointMatch],
    prev: &SensorFrame,
    curr: &SensorFrame,
) -> CorrespondenceMap {
    let mut map = CorrespondenceMap::new();
    if matches.is_empty() || prev.regions.is_empty() || curr.regions.is_empty() {
        return map;
    }

    // Resolve each match's current-frame region once, up front
    let current_owner: Vec<Option<usize>> = matches
        .iter()
        .map(|m| {
            let keypoint = &curr.keypoints[m.curr_idx];
            curr.regions.iter().position(|r| r.rect.contains(keypoint))
        })
        .collect();

    for prev_region in &prev.regions {
        let mut votes = vec![0u32; curr.regions.len()];
        let mut total = 0u32;

        for (m, owner) in matches.iter().zip(&current_owner) {
            let Some(curr_index) = owner else { continue };
            if prev_region.rect.contains(&prev.keypoints[m.prev_idx]) {
                votes[*curr_index] += 1;
                total += 1;
            }
        }

        if total == 0 {
            continue;
        }

        let mut best = 0;
        for (index, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = index;
            }
        }

        trace!(
            "region {} -> {} ({}/{} votes)",
            prev_region.id,
            curr.regions[best].id,
            votes[best],
            total
        );
        map.insert(prev_region.id, curr.regions[best].id);
    }

    map
}
