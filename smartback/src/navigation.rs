//! The "smart back" decision.
//!
//! Reads the current location from a [`NavigationHost`], resolves its
//! logical parent and navigates there. Declared root pages fall back to
//! native history, or to the hierarchy's landing page when there is none.

use smartback_router::PageHierarchy;
use smartback_utils::join_location;

use crate::error::NavigationError;

/// The slice of `window.location` and `window.history` the back button needs.
pub trait NavigationHost {
    /// `location.pathname`
    fn pathname(&self) -> Result<String, NavigationError>;

    /// `location.search`, including the leading `?` when non-empty.
    fn search(&self) -> Result<String, NavigationError>;

    /// `history.length`
    fn history_length(&self) -> Result<u32, NavigationError>;

    /// Full navigation, `location.href = href`.
    fn assign(&self, href: &str) -> Result<(), NavigationError>;

    /// `history.back()`
    fn back(&self) -> Result<(), NavigationError>;
}

/// What [`smart_back`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigated to the resolved parent.
    Parent(String),
    /// Root page with history: went back natively.
    WentBack,
    /// Root page without history: navigated to the landing page.
    Landing(String),
}

/// Navigate from the host's current page to its logical parent.
///
/// Exactly one host navigation is performed: an assignment to the parent,
/// a `history.back()`, or an assignment to [`PageHierarchy::landing`].
pub fn smart_back<H>(
    host: &H,
    hierarchy: &PageHierarchy,
) -> Result<NavigationOutcome, NavigationError>
where
    H: NavigationHost + ?Sized,
{
    let current = join_location(&host.pathname()?, &host.search()?);
    let resolution = hierarchy.resolve_with_step(&current);

    log::debug!(
        "smart back from {current}: {:?} -> {:?}",
        resolution.step,
        resolution.parent
    );

    if let Some(parent) = resolution.parent {
        host.assign(parent)?;
        return Ok(NavigationOutcome::Parent(parent.to_owned()));
    }

    let history_length = host.history_length()?;
    if history_length > 1 {
        log::debug!("{current} is a root page, going back ({history_length} history entries)");
        host.back()?;
        Ok(NavigationOutcome::WentBack)
    } else {
        let landing = hierarchy.landing();
        log::debug!("{current} is a root page with no history, going to {landing}");
        host.assign(landing)?;
        Ok(NavigationOutcome::Landing(landing.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use smartback_router::default_hierarchy;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Assign(String),
        Back,
    }

    struct FakeHost {
        pathname: &'static str,
        search: &'static str,
        history_length: u32,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeHost {
        fn new(pathname: &'static str, search: &'static str, history_length: u32) -> Self {
            Self {
                pathname,
                search,
                history_length,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl NavigationHost for FakeHost {
        fn pathname(&self) -> Result<String, NavigationError> {
            Ok(self.pathname.to_owned())
        }

        fn search(&self) -> Result<String, NavigationError> {
            Ok(self.search.to_owned())
        }

        fn history_length(&self) -> Result<u32, NavigationError> {
            Ok(self.history_length)
        }

        fn assign(&self, href: &str) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(Call::Assign(href.to_owned()));
            Ok(())
        }

        fn back(&self) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push(Call::Back);
            Ok(())
        }
    }

    struct BrokenHistory;

    impl NavigationHost for BrokenHistory {
        fn pathname(&self) -> Result<String, NavigationError> {
            Ok(String::from("/"))
        }

        fn search(&self) -> Result<String, NavigationError> {
            Ok(String::new())
        }

        fn history_length(&self) -> Result<u32, NavigationError> {
            Err(NavigationError::Host {
                op: "history.length",
                message: String::from("SecurityError"),
            })
        }

        fn assign(&self, _href: &str) -> Result<(), NavigationError> {
            panic!("must not navigate")
        }

        fn back(&self) -> Result<(), NavigationError> {
            panic!("must not navigate")
        }
    }

    #[test]
    fn test_navigates_to_parent() {
        let host = FakeHost::new("/admin/core/project/42/change/", "", 5);

        let outcome = smart_back(&host, default_hierarchy()).unwrap();

        assert_eq!(
            outcome,
            NavigationOutcome::Parent(String::from("/admin/core/project/"))
        );
        assert_eq!(
            host.calls(),
            vec![Call::Assign(String::from("/admin/core/project/"))]
        );
    }

    #[test]
    fn test_search_reaches_the_resolver() {
        let host = FakeHost::new("/admin/core/finding/", "?project__id__exact=5", 1);

        smart_back(&host, default_hierarchy()).unwrap();

        assert_eq!(
            host.calls(),
            vec![Call::Assign(String::from("/admin/core/project/"))]
        );
    }

    #[test]
    fn test_root_without_history_goes_to_landing() {
        for history_length in [0, 1] {
            let host = FakeHost::new("/", "", history_length);

            let outcome = smart_back(&host, default_hierarchy()).unwrap();

            assert_eq!(outcome, NavigationOutcome::Landing(String::from("/admin/")));
            assert_eq!(host.calls(), vec![Call::Assign(String::from("/admin/"))]);
        }
    }

    #[test]
    fn test_root_with_history_goes_back() {
        let host = FakeHost::new("/", "?next=/admin/", 2);

        let outcome = smart_back(&host, default_hierarchy()).unwrap();

        assert_eq!(outcome, NavigationOutcome::WentBack);
        assert_eq!(host.calls(), vec![Call::Back]);
    }

    #[test]
    fn test_unknown_page_goes_to_site_root() {
        let host = FakeHost::new("/some/totally/unknown/path/", "", 9);

        smart_back(&host, default_hierarchy()).unwrap();

        assert_eq!(host.calls(), vec![Call::Assign(String::from("/"))]);
    }

    #[test]
    fn test_custom_landing() {
        let hierarchy = PageHierarchy::builder()
            .root("/dashboard/")
            .landing("/dashboard/")
            .build()
            .unwrap();
        let host = FakeHost::new("/dashboard/", "", 1);

        let outcome = smart_back(&host, &hierarchy).unwrap();

        assert_eq!(
            outcome,
            NavigationOutcome::Landing(String::from("/dashboard/"))
        );
    }

    #[test]
    fn test_host_errors_propagate() {
        let error = smart_back(&BrokenHistory, default_hierarchy()).unwrap_err();

        assert_eq!(error.to_string(), "history.length failed: SecurityError");
    }

    #[test]
    fn test_dyn_host() {
        let host = FakeHost::new("/admin/", "", 1);
        let dyn_host: &dyn NavigationHost = &host;

        smart_back(dyn_host, default_hierarchy()).unwrap();

        assert_eq!(host.calls(), vec![Call::Assign(String::from("/"))]);
    }
}
