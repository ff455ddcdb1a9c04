//! Block grouping and decomposition.
//!
//! Unit pieces sharing a block id are cut next to each other. A block that fits
//! on one sheet is packed as a single [`CompositeBlock`]; a larger block is cut
//! greedily into left-to-right sub-blocks no wider than the sheet. Only one row
//! of sub-blocks is ever formed, and closed sub-blocks are never revisited.

use crate::pool::{CompositeBlock, PackItem};
use cutlist_core::{
    BlockDiagnostic, BlockStatus, Rotation, SheetConfig, UnitPiece, UnplacedPiece, UnplacedReason,
    ValidationIssue,
};
use std::collections::HashMap;

/// Unit pieces of one block, in input order.
#[derive(Debug, Clone)]
struct BlockGroup {
    id: String,
    members: Vec<UnitPiece>,
}

enum Entry {
    Plain(UnitPiece),
    Block(usize),
}

/// Splits units into plain entries and block groups, keeping first-appearance order.
fn group_units(units: Vec<UnitPiece>) -> (Vec<Entry>, Vec<BlockGroup>) {
    let mut entries = Vec::new();
    let mut groups: Vec<BlockGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for unit in units {
        let Some(block_id) = unit.block.as_ref().map(|b| b.id.clone()) else {
            entries.push(Entry::Plain(unit));
            continue;
        };
        match index.get(&block_id) {
            Some(&i) => groups[i].members.push(unit),
            None => {
                index.insert(block_id.clone(), groups.len());
                entries.push(Entry::Block(groups.len()));
                groups.push(BlockGroup {
                    id: block_id,
                    members: vec![unit],
                });
            }
        }
    }

    (entries, groups)
}

/// Rotation applied to every member: vertical grain turns the whole block.
fn block_rotation(members: &[UnitPiece]) -> Rotation {
    if members.iter().all(UnitPiece::has_vertical_grain) {
        Rotation::Deg90
    } else {
        Rotation::Deg0
    }
}

/// Reason a grouping cannot be packed, if any.
fn malformation(members: &[UnitPiece]) -> Option<String> {
    let first = members.first()?;
    if let Some(other) = members.iter().find(|m| m.wood_type != first.wood_type) {
        return Some(format!(
            "members span wood types {:?} and {:?}",
            first.wood_type.as_deref().unwrap_or("default"),
            other.wood_type.as_deref().unwrap_or("default")
        ));
    }
    let vertical = members.iter().filter(|m| m.has_vertical_grain()).count();
    if vertical != 0 && vertical != members.len() {
        return Some(format!(
            "{} of {} members have vertical grain",
            vertical,
            members.len()
        ));
    }
    None
}

fn diagnostic(
    id: &str,
    composite: &CompositeBlock,
    config: &SheetConfig,
    status: BlockStatus,
) -> BlockDiagnostic {
    BlockDiagnostic {
        block_id: id.to_string(),
        wood_type: composite
            .members
            .first()
            .and_then(|m| m.wood_type.clone()),
        members: composite.members.len(),
        aggregate_width: composite.width,
        aggregate_height: composite.height,
        can_fit_on_single_board: composite.width <= config.width
            && composite.height <= config.height,
        status,
    }
}

/// Units that passed block screening plus everything rejected.
#[derive(Debug, Default)]
pub struct Screening {
    pub accepted: Vec<UnitPiece>,
    pub unplaced: Vec<UnplacedPiece>,
    pub blocks: Vec<BlockDiagnostic>,
    pub issues: Vec<ValidationIssue>,
}

/// Removes malformed block groupings from `units`.
///
/// A grouping is malformed when its members disagree on wood type, or when
/// some but not all of them carry vertical grain. Every member of a malformed
/// grouping is reported unplaced; the rest of the units pass through in order.
pub fn screen_blocks(units: Vec<UnitPiece>, config: &SheetConfig) -> Screening {
    let mut screening = Screening::default();
    let (entries, groups) = group_units(units);

    let mut rejected = vec![false; groups.len()];
    for (i, group) in groups.iter().enumerate() {
        if let Some(reason) = malformation(&group.members) {
            log::warn!("block '{}' rejected: {}", group.id, reason);
            let composite =
                CompositeBlock::new(group.id.clone(), group.members.clone(), Rotation::Deg0);
            screening.blocks.push(diagnostic(
                &group.id,
                &composite,
                config,
                BlockStatus::Malformed(reason.clone()),
            ));
            screening.issues.push(ValidationIssue::MalformedBlock {
                block_id: group.id.clone(),
                reason,
            });
            rejected[i] = true;
        }
    }

    let mut groups: Vec<Option<BlockGroup>> = groups.into_iter().map(Some).collect();
    for entry in entries {
        match entry {
            Entry::Plain(unit) => screening.accepted.push(unit),
            Entry::Block(i) => {
                let Some(group) = groups[i].take() else {
                    continue;
                };
                if rejected[i] {
                    screening.unplaced.extend(
                        group
                            .members
                            .into_iter()
                            .map(|m| UnplacedPiece::new(m, UnplacedReason::MalformedBlock)),
                    );
                } else {
                    screening.accepted.extend(group.members);
                }
            }
        }
    }

    screening
}

/// Cuts members into consecutive runs whose combined width fits `sheet_width`.
///
/// A member wider than the sheet on its own ends up alone in its run.
pub fn split_into_sub_blocks(
    members: Vec<UnitPiece>,
    rotation: Rotation,
    sheet_width: f64,
) -> Vec<Vec<UnitPiece>> {
    let mut runs = Vec::new();
    let mut current: Vec<UnitPiece> = Vec::new();
    let mut current_width = 0.0;

    for member in members {
        let (width, _) = rotation.apply(member.width, member.height);
        if !current.is_empty() && current_width + width > sheet_width {
            runs.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current_width += width;
        current.push(member);
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Pack items and diagnostics produced for one wood-type bucket.
#[derive(Debug, Default)]
pub struct Decomposition {
    pub items: Vec<PackItem>,
    pub blocks: Vec<BlockDiagnostic>,
    pub issues: Vec<ValidationIssue>,
}

/// Turns the units of one bucket into pack items.
///
/// Unblocked units become single items. Each block becomes one composite if it
/// fits on a sheet, otherwise one item per sub-block: a sub-block holding a
/// single member, or one too tall for the sheet, falls back to single items.
pub fn decompose(units: Vec<UnitPiece>, config: &SheetConfig) -> Decomposition {
    let mut result = Decomposition::default();
    let (entries, groups) = group_units(units);
    let mut groups: Vec<Option<BlockGroup>> = groups.into_iter().map(Some).collect();

    for entry in entries {
        let group = match entry {
            Entry::Plain(unit) => {
                result.items.push(PackItem::Single(unit));
                continue;
            }
            Entry::Block(i) => match groups[i].take() {
                Some(group) => group,
                None => continue,
            },
        };

        let mut members = group.members;
        members.sort_by_key(|m| m.block.as_ref().map_or(0, |b| b.position));
        let rotation = block_rotation(&members);
        let composite = CompositeBlock::new(group.id.clone(), members, rotation);

        if composite.width <= config.width && composite.height <= config.height {
            result.blocks.push(diagnostic(
                &group.id,
                &composite,
                config,
                BlockStatus::Intact,
            ));
            if composite.members.len() == 1 {
                result
                    .items
                    .extend(composite.members.into_iter().map(PackItem::Single));
            } else {
                result.items.push(PackItem::Composite(composite));
            }
            continue;
        }

        log::debug!(
            "block '{}' ({} x {}) exceeds the sheet, splitting",
            group.id,
            composite.width,
            composite.height
        );
        result.issues.push(ValidationIssue::BlockSplit {
            block_id: group.id.clone(),
            aggregate_width: composite.width,
            aggregate_height: composite.height,
        });

        let runs = split_into_sub_blocks(composite.members.clone(), rotation, config.width);
        result.blocks.push(diagnostic(
            &group.id,
            &composite,
            config,
            BlockStatus::Split(runs.len()),
        ));

        for run in runs {
            if run.len() == 1 {
                result.items.extend(run.into_iter().map(PackItem::Single));
                continue;
            }
            let sub_block = CompositeBlock::new(group.id.clone(), run, rotation);
            if sub_block.width <= config.width && sub_block.height <= config.height {
                result.items.push(PackItem::Composite(sub_block));
            } else {
                result
                    .items
                    .extend(sub_block.members.into_iter().map(PackItem::Single));
            }
        }
    }

    result
}
