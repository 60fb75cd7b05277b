// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Topology store abstraction

pub mod mem;

use crate::domain::model::GlobalService;
use crate::shared::error::TopologyError;

pub use self::mem::MemDataModel;

/// Store that owns global service state.
///
/// Conflict handling on `create_global_service` belongs to the implementation.
pub trait DataModel {
    fn create_global_service(&mut self, service: GlobalService) -> Result<(), TopologyError>;

    fn global_service(&self, name: &str) -> Option<&GlobalService>;

    /// All services in creation order
    fn global_services(&self) -> Vec<&GlobalService>;

    fn len(&self) -> usize {
        self.global_services().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
