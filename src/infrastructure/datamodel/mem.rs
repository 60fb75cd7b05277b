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

use super::DataModel;
use crate::domain::model::GlobalService;
use crate::infrastructure::constants::KIND_GLOBAL_SERVICE;
use crate::shared::error::TopologyError;
use std::collections::HashMap;

/// In-memory store scoped to a single invocation.
#[derive(Debug, Default, Clone)]
pub struct MemDataModel {
    services: Vec<GlobalService>,
    by_name: HashMap<String, usize>,
}

impl MemDataModel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataModel for MemDataModel {
    fn create_global_service(&mut self, service: GlobalService) -> Result<(), TopologyError> {
        service.validate()?;

        if self.by_name.contains_key(&service.name) {
            return Err(TopologyError::already_exists(KIND_GLOBAL_SERVICE, service.name));
        }

        self.by_name.insert(service.name.clone(), self.services.len());
        self.services.push(service);
        Ok(())
    }

    fn global_service(&self, name: &str) -> Option<&GlobalService> {
        self.by_name.get(name).map(|&idx| &self.services[idx])
    }

    fn global_services(&self) -> Vec<&GlobalService> {
        self.services.iter().collect()
    }

    fn len(&self) -> usize {
        self.services.len()
    }
}
