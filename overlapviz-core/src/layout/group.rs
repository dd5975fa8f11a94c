use crate::{analysis::bbox::Bbox, layout::element::LabeledBox};

/// Boxes grouped by label.
///
/// Groups keep the order in which their label first appeared; boxes keep their
/// order inside a group. Flattening walks group by group, so boxes of a label
/// stay together even when the input interleaves labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxGroups {
    groups: Vec<(String, Vec<LabeledBox>)>,
}

impl BoxGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, labeled: LabeledBox) {
        match self
            .groups
            .iter_mut()
            .find(|(label, _)| *label == labeled.label)
        {
            Some((_, boxes)) => boxes.push(labeled),
            None => self.groups.push((labeled.label.clone(), vec![labeled])),
        }
    }

    /// Total number of boxes across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, boxes)| boxes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(label, _)| label.as_str())
    }

    pub fn group(&self, label: &str) -> Option<&[LabeledBox]> {
        self.groups
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, boxes)| boxes.as_slice())
    }

    pub fn flatten(self) -> Vec<LabeledBox> {
        self.groups
            .into_iter()
            .flat_map(|(_, boxes)| boxes)
            .collect()
    }

    /// The flattened geometry, labels dropped.
    pub fn bboxes(&self) -> Vec<Bbox> {
        self.groups
            .iter()
            .flat_map(|(_, boxes)| boxes.iter().map(|b| b.bbox))
            .collect()
    }
}
