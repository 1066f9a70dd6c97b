//! Keyed visual tree of the timeline: year group → disaster group → mark + label.
//!
//! Every render joins the grouped data against the existing tree. Nodes whose
//! key disappeared exit, nodes for new keys enter with a fresh id, and nodes
//! whose key survives are updated in place and keep their id, which is what the
//! UI layer uses as a stable element identity between filter changes.

use crate::arc::ArcGenerator;
use crate::grouping::{RankedDisaster, YearGroup};
use crate::scales::{BandScale, SqrtScale, TimeScale};
use disaster_core::record::DisasterRecord;
use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;

pub type NodeId = u64;

/// How many nodes a join created, kept and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinCounts {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Join results for both keyed levels of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinStats {
    pub years: JoinCounts,
    pub disasters: JoinCounts,
}

/// Semicircle for one disaster.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkNode {
    /// `mark <category-id>`
    pub class: String,
    pub fill: &'static str,
    pub path: String,
}

/// Name label under a mark; empty unless the disaster is its year's costliest.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub text: String,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisasterNode {
    pub id: NodeId,
    /// The disaster name, suffixed with " (n)" for repeated names within a year
    pub key: String,
    /// Horizontal offset inside the year group
    pub x: f64,
    pub record: DisasterRecord,
    pub mark: MarkNode,
    pub label: LabelNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearNode {
    pub id: NodeId,
    pub year: i32,
    /// Vertical offset of the row center
    pub y: f64,
    pub disasters: Vec<DisasterNode>,
}

/// Scales and generators used to place nodes during a join.
#[derive(Debug, Clone, Copy)]
pub struct Projection<'a> {
    pub x: &'a TimeScale,
    pub y: &'a BandScale<i32>,
    pub radius: &'a SqrtScale,
    pub arc: &'a ArcGenerator,
}

/// Join `data` into `nodes` by key, preserving data order.
///
/// `update` runs on both entering and surviving nodes. Nodes left over once
/// all data is matched (including duplicate keys among the old nodes) exit.
pub fn join_keyed<K, N, D>(
    nodes: &mut Vec<N>,
    data: impl IntoIterator<Item = D>,
    node_key: impl Fn(&N) -> K,
    datum_key: impl Fn(&D) -> K,
    mut enter: impl FnMut(&D) -> N,
    mut update: impl FnMut(&mut N, &D),
) -> JoinCounts
where
    K: Eq + Hash,
{
    let mut counts = JoinCounts::default();
    let mut existing: HashMap<K, N> = HashMap::new();
    for node in nodes.drain(..) {
        let key = node_key(&node);
        if existing.contains_key(&key) {
            counts.exited += 1;
        } else {
            existing.insert(key, node);
        }
    }

    for datum in data {
        let mut node = match existing.remove(&datum_key(&datum)) {
            Some(node) => {
                counts.updated += 1;
                node
            }
            None => {
                counts.entered += 1;
                enter(&datum)
            }
        };
        update(&mut node, &datum);
        nodes.push(node);
    }

    counts.exited += existing.len();
    counts
}

/// Pair each disaster of a year with its join key.
fn keyed_disasters(disasters: &[RankedDisaster]) -> Vec<(String, &RankedDisaster)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    disasters
        .iter()
        .map(|d| {
            let n = seen.entry(d.record.name.as_str()).or_insert(0);
            *n += 1;
            let key = if *n == 1 {
                d.record.name.clone()
            } else {
                format!("{} ({})", d.record.name, n)
            };
            (key, d)
        })
        .collect()
}

/// The retained visual tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    years: Vec<YearNode>,
    next_id: NodeId,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn years(&self) -> &[YearNode] {
        &self.years
    }

    pub fn disasters(&self) -> impl Iterator<Item = &DisasterNode> {
        self.years.iter().flat_map(|y| y.disasters.iter())
    }

    /// First disaster node with this key, in any year.
    pub fn find_disaster(&self, key: &str) -> Option<&DisasterNode> {
        self.disasters().find(|d| d.key == key)
    }

    /// Bring the tree in line with `groups`.
    ///
    /// Groups whose year is not on the band scale are skipped.
    pub fn join(&mut self, groups: &[YearGroup], projection: Projection<'_>) -> JoinStats {
        let next_id = Cell::new(self.next_id);
        let fresh_id = || {
            let id = next_id.get();
            next_id.set(id + 1);
            id
        };

        let half_band = projection.y.bandwidth() / 2.0;
        let placed: Vec<(&YearGroup, f64)> = groups
            .iter()
            .filter_map(|group| match projection.y.scale(&group.year) {
                Some(y) => Some((group, y + half_band)),
                None => {
                    log::warn!("[Disasters] scene: year {} is not on the y axis, skipping", group.year);
                    None
                }
            })
            .collect();

        let disasters_before = self.disasters().count();
        let mut disaster_counts = JoinCounts::default();
        let year_counts = join_keyed(
            &mut self.years,
            placed,
            |node| node.year,
            |(group, _)| group.year,
            |(group, _)| YearNode {
                id: fresh_id(),
                year: group.year,
                y: 0.0,
                disasters: Vec::new(),
            },
            |node, (group, y)| {
                node.y = *y;
                let counts = join_keyed(
                    &mut node.disasters,
                    keyed_disasters(&group.disasters),
                    |node| node.key.clone(),
                    |(key, _)| key.clone(),
                    |(key, ranked)| DisasterNode {
                        id: fresh_id(),
                        key: key.clone(),
                        x: 0.0,
                        record: ranked.record.clone(),
                        mark: MarkNode {
                            class: String::new(),
                            fill: ranked.record.category.color(),
                            path: String::new(),
                        },
                        label: LabelNode {
                            text: String::new(),
                            dy: 0.0,
                        },
                    },
                    |node, (_, ranked)| update_disaster(node, ranked, projection, half_band),
                );
                disaster_counts.entered += counts.entered;
                disaster_counts.updated += counts.updated;
            },
        );
        // disasters of exiting years leave with their group
        disaster_counts.exited = disasters_before - disaster_counts.updated;

        self.next_id = next_id.get();
        JoinStats {
            years: year_counts,
            disasters: disaster_counts,
        }
    }
}

fn update_disaster(
    node: &mut DisasterNode,
    ranked: &RankedDisaster,
    projection: Projection<'_>,
    half_band: f64,
) {
    let record = &ranked.record;
    node.x = projection.x.scale(record.reference_date());
    node.mark.class = format!("mark {}", record.category);
    node.mark.fill = record.category.color();
    node.mark.path = projection.arc.path(projection.radius.scale(record.cost));
    node.label.text = if ranked.is_max_of_year {
        record.name.clone()
    } else {
        String::new()
    };
    // below the mark
    node.label.dy = half_band;
    node.record = record.clone();
}
