use serde::Serialize;

use super::category::Category;
use super::record::Record;
use super::trade::Branding;

/// The three normalized record sequences of one request, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EstimateInput {
    pub routes: Vec<Record>,
    pub devices: Vec<Record>,
    pub conduit: Vec<Record>,
}

impl EstimateInput {
    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Routes => &self.routes,
            Category::Devices => &self.devices,
            Category::Conduit => &self.conduit,
        }
    }

    pub fn counts(&self) -> EstimateCounts {
        EstimateCounts {
            routes: self.routes.len(),
            devices: self.devices.len(),
            conduit: self.conduit.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EstimateCounts {
    pub routes: usize,
    pub devices: usize,
    pub conduit: usize,
}

impl EstimateCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Routes => self.routes,
            Category::Devices => self.devices,
            Category::Conduit => self.conduit,
        }
    }

    pub fn total(&self) -> usize {
        self.routes + self.devices + self.conduit
    }
}

/// A validated generation request: records plus header branding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateRequest {
    pub input: EstimateInput,
    pub branding: Branding,
}
