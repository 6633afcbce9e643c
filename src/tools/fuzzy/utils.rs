use std::cmp::Ordering;

use super::types::MatchBlock;

/// Half-open char ranges `[alo, ahi)` and `[blo, bhi)` still to be matched.
#[derive(Debug, Clone, Copy)]
struct Region {
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
}

/// Longest block common to `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the earliest start in `a`, then the earliest start in `b`.
/// Returns a block of size 0 when the regions share nothing.
fn find_longest_match(a: &[char], b: &[char], region: Region) -> MatchBlock {
    let Region { alo, ahi, blo, bhi } = region;
    let width = bhi - blo;

    // run[col] = length of the common suffix ending at a[i], b[blo + col - 1]
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];
    let mut best = MatchBlock {
        a: alo,
        b: blo,
        size: 0,
    };

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            curr[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };
            if curr[col] > best.size {
                best = MatchBlock {
                    a: i + 1 - curr[col],
                    b: j + 1 - curr[col],
                    size: curr[col],
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Ratcliff/Obershelp matching: take the longest common block, then repeat
/// on the regions left and right of it. Blocks come back sorted by position.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<MatchBlock> {
    let mut blocks = Vec::new();
    let mut pending = vec![Region {
        alo: 0,
        ahi: a.len(),
        blo: 0,
        bhi: b.len(),
    }];

    while let Some(region) = pending.pop() {
        let block = find_longest_match(a, b, region);
        if block.size == 0 {
            continue;
        }

        if region.alo < block.a && region.blo < block.b {
            pending.push(Region {
                alo: region.alo,
                ahi: block.a,
                blo: region.blo,
                bhi: block.b,
            });
        }
        if block.a_end() < region.ahi && block.b_end() < region.bhi {
            pending.push(Region {
                alo: block.a_end(),
                ahi: region.ahi,
                blo: block.b_end(),
                bhi: region.bhi,
            });
        }
        blocks.push(block);
    }

    blocks.sort_unstable();
    blocks
}

/// Order a pair so that the result does not depend on argument order:
/// shorter first, then lexicographically smaller first.
pub fn canonical_pair<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    match a.len().cmp(&b.len()).then_with(|| a.cmp(b)) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}

pub fn total_matched(a: &[char], b: &[char]) -> usize {
    matching_blocks(a, b).iter().map(|block| block.size).sum()
}

/// Round to three decimal places, ties to even.
///
/// Ties are judged on the exact value of `value`, not on the rounded
/// product: `0.3125` is a true tie and goes to `0.312`, while the double
/// nearest `0.0025` sits just above the tie and goes to `0.003`.
pub fn round3(value: f64) -> f64 {
    let scaled = value * 1000.0;
    // exact error of the product above
    let residue = value.mul_add(1000.0, -scaled);

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && residue != 0.0 {
        if residue > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };
    rounded / 1000.0
}
