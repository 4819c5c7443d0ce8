//! `ChainItem` implementations for the reference entities, giving each a
//! stable id and the label the selectors display.

use contracts::domain::a001_company::Company;
use contracts::domain::a002_contract::Contract;
use contracts::domain::a003_employee::Employee;
use contracts::domain::a004_work_location::WorkLocation;

use crate::shared::cascade::ChainItem;

impl ChainItem for Company {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.display_name().to_string()
    }
}

impl ChainItem for Contract {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl ChainItem for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.registration)
    }
}

impl ChainItem for WorkLocation {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
