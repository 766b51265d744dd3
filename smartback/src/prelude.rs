pub use crate::{
    BrowserHost, NavigationError, NavigationHost, NavigationOutcome, PageHierarchy,
    default_hierarchy, init_data, smart_back,
};
