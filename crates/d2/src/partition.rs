//! Wood-type partitioning.

use cutlist_core::UnitPiece;

/// Unit pieces sharing one wood type. `None` is the untagged default bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct WoodBucket {
    pub wood_type: Option<String>,
    pub units: Vec<UnitPiece>,
}

/// Buckets units by wood type in order of first appearance.
///
/// Buckets never share sheets; each is packed on its own.
pub fn partition_by_wood_type(units: Vec<UnitPiece>) -> Vec<WoodBucket> {
    let mut buckets: Vec<WoodBucket> = Vec::new();

    for unit in units {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.wood_type == unit.wood_type)
        {
            Some(bucket) => bucket.units.push(unit),
            None => buckets.push(WoodBucket {
                wood_type: unit.wood_type.clone(),
                units: vec![unit],
            }),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::Piece;

    fn unit(id: &str, wood: Option<&str>) -> UnitPiece {
        let piece = Piece::new(id, 100.0, 100.0, 1).unwrap();
        let piece = match wood {
            Some(w) => piece.with_wood_type(w),
            None => piece,
        };
        piece.expand().remove(0)
    }

    #[test]
    fn test_first_appearance_order() {
        let buckets = partition_by_wood_type(vec![
            unit("a", Some("oak")),
            unit("b", None),
            unit("c", Some("pine")),
            unit("d", Some("oak")),
            unit("e", None),
        ]);

        let keys: Vec<_> = buckets.iter().map(|b| b.wood_type.as_deref()).collect();
        assert_eq!(keys, vec![Some("oak"), None, Some("pine")]);

        let oak: Vec<_> = buckets[0].units.iter().map(|u| u.piece_id.as_str()).collect();
        assert_eq!(oak, vec!["a", "d"]);
        assert_eq!(buckets[1].units.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(partition_by_wood_type(Vec::new()).is_empty());
    }
}
