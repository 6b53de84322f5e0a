use crate::catalog::{Catalog, VehicleRecord};
use crate::config::Config;
use crate::router::{MemoryHistory, NavigationHost, Page, RouteState, Router};
use crate::ui::address::{AddressBarState, AddressIntent, AddressReducer};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// What the home view lists.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeListing<'a> {
    pub vehicles: Vec<&'a VehicleRecord>,
    /// True when the search matched nothing and the featured listings are
    /// shown instead.
    pub featured: bool,
}

pub struct App {
    should_quit: bool,
    config: Config,
    catalog: Catalog,
    router: Router<MemoryHistory>,
    /// Route changes delivered by the router subscription, drained by
    /// [`App::sync_views`].
    route_inbox: Rc<RefCell<VecDeque<RouteState>>>,
    search: SearchState,
    detail: DetailState,
    address: AddressBarState,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, start_location: &str) -> Self {
        let mut router = Router::new(MemoryHistory::new(start_location));
        let route_inbox = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&route_inbox);
        router.subscribe(move |state: &RouteState| sink.borrow_mut().push_back(state.clone()));

        let mut app = Self {
            should_quit: false,
            config,
            catalog,
            router,
            route_inbox,
            search: SearchState::default(),
            detail: DetailState::default(),
            address: AddressBarState::default(),
        };
        let initial = app.router.state().clone();
        app.on_route_change(&initial);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn router(&self) -> &Router<MemoryHistory> {
        &self.router
    }

    pub fn route(&self) -> &RouteState {
        self.router.state()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn address(&self) -> &AddressBarState {
        &self.address
    }

    /// Vehicle for the active detail route, if it exists in the catalog.
    pub fn current_vehicle(&self) -> Option<&VehicleRecord> {
        if self.router.page() != Page::CarDetail {
            return None;
        }
        let id = self.router.state().param("id")?;
        self.catalog.lookup(id)
    }

    pub fn home_listing(&self) -> HomeListing<'_> {
        let matches = self.catalog.filter(&self.search.criteria());
        if matches.is_empty() {
            return HomeListing {
                vehicles: self.catalog.featured(self.config.display.featured_limit),
                featured: true,
            };
        }
        HomeListing {
            vehicles: matches,
            featured: false,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Opens the highlighted home result. Returns false if there is none.
    pub fn open_selected(&mut self) -> bool {
        let id = {
            let listing = self.home_listing();
            let Some(vehicle) = listing.vehicles.get(self.search.selected) else {
                return false;
            };
            vehicle.id.clone()
        };
        self.open_vehicle(&id);
        true
    }

    pub fn open_vehicle(&mut self, id: &str) {
        let RouteState { page, params } = RouteState::detail(id);
        self.router.navigate_to(page, params);
        self.sync_views();
    }

    pub fn go_home(&mut self) {
        self.router.navigate_to(Page::Home, Default::default());
        self.sync_views();
    }

    /// Requests back traversal; the route changes on the next
    /// [`pump_navigation`](Self::pump_navigation).
    pub fn go_back(&mut self) {
        self.router.go_back();
    }

    /// Goes back when there is an earlier entry. A session that opened
    /// directly on this page has none, so it goes home instead.
    pub fn back_or_home(&mut self) {
        if self.router.host().can_go_back() {
            self.go_back();
        } else {
            self.go_home();
        }
    }

    pub fn go_forward(&mut self) {
        self.router.go_forward();
    }

    /// Delivers pending host navigation to the router and the views.
    pub fn pump_navigation(&mut self) -> usize {
        let handled = self.router.pump();
        self.sync_views();
        handled
    }

    /// Applies route changes received from the router subscription.
    pub fn sync_views(&mut self) {
        let changes: Vec<RouteState> = self.route_inbox.borrow_mut().drain(..).collect();
        for state in changes {
            self.on_route_change(&state);
        }
    }

    fn on_route_change(&mut self, state: &RouteState) {
        if state.page != Page::CarDetail {
            return;
        }
        let favorite = state
            .param("id")
            .and_then(|id| self.catalog.lookup(id))
            .is_some_and(|vehicle| vehicle.is_favorite);
        self.dispatch_detail(DetailIntent::Open { favorite });
    }

    // ========================================================================
    // Address bar
    // ========================================================================

    pub fn open_address_bar(&mut self) {
        let current = self.router.host().location().to_string();
        self.dispatch_address(AddressIntent::Open { current });
    }

    /// Opens the typed location as an untagged host entry. The router picks
    /// it up on the next pump.
    pub fn submit_address(&mut self) {
        let Some(location) = self.address.buffer().map(str::trim).map(str::to_string) else {
            return;
        };
        self.dispatch_address(AddressIntent::Cancel);
        let location = if location.is_empty() {
            "/".to_string()
        } else {
            location
        };
        tracing::debug!(%location, "Address bar navigation");
        self.router.host_mut().open_location(&location);
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn dispatch_address(&mut self, intent: AddressIntent) {
        dispatch_mvi!(self, address, AddressReducer, intent);
    }

    /// Number of images for the active vehicle's gallery.
    pub fn gallery_len(&self) -> usize {
        self.current_vehicle().map_or(0, |vehicle| vehicle.gallery().len())
    }

    /// Number of rows in the home results list.
    pub fn result_count(&self) -> usize {
        self.home_listing().vehicles.len()
    }

    /// True while a text field is capturing plain characters.
    pub fn is_text_entry(&self) -> bool {
        self.address.is_editing()
            || (self.router.page() == Page::Home && self.search.is_editing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::search::SearchField;

    fn make_app(start: &str) -> App {
        App::new(Catalog::builtin().unwrap(), Config::default(), start)
    }

    fn type_into(app: &mut App, field: SearchField, text: &str) {
        while app.search().focused_field() != field {
            app.dispatch_search(SearchIntent::FocusNextField);
        }
        for ch in text.chars() {
            app.dispatch_search(SearchIntent::Insert(ch));
        }
    }

    #[test]
    fn starts_on_home_with_full_catalog() {
        let app = make_app("/");
        let listing = app.home_listing();
        assert_eq!(app.route(), &RouteState::home());
        assert_eq!(listing.vehicles.len(), 8);
        assert!(!listing.featured);
    }

    #[test]
    fn empty_search_falls_back_to_featured() {
        let mut app = make_app("/");
        type_into(&mut app, SearchField::Make, "trabant");
        let listing = app.home_listing();
        assert!(listing.featured);
        assert_eq!(listing.vehicles.len(), 6);
    }

    #[test]
    fn out_of_range_year_min_falls_back_to_featured() {
        let mut app = make_app("/");
        type_into(&mut app, SearchField::YearMin, "99999");
        assert_eq!(app.search().criteria().year_min, Some(u16::MAX));
        let listing = app.home_listing();
        assert!(listing.featured);
        assert_eq!(listing.vehicles.len(), 6);
    }

    #[test]
    fn open_selected_navigates_to_detail() {
        let mut app = make_app("/");
        type_into(&mut app, SearchField::BodyType, "sedan");
        app.dispatch_search(SearchIntent::ToggleFocus);
        app.dispatch_search(SearchIntent::MoveSelection {
            delta: 1,
            result_count: app.result_count(),
        });
        assert!(app.open_selected());
        assert_eq!(app.route(), &RouteState::detail("3"));
        assert_eq!(app.router().host().pathname(), "/car-detail/3");
    }

    #[test]
    fn opening_a_favorite_seeds_detail_state() {
        let mut app = make_app("/");
        app.open_vehicle("2");
        assert!(app.detail().favorite);
        app.dispatch_detail(DetailIntent::NextImage { count: app.gallery_len() });
        assert_eq!(app.detail().image_index, 1);
        app.open_vehicle("1");
        assert!(!app.detail().favorite);
        assert_eq!(app.detail().image_index, 0);
    }

    #[test]
    fn go_back_applies_on_pump() {
        let mut app = make_app("/");
        app.open_vehicle("4");
        app.go_back();
        assert_eq!(app.route(), &RouteState::detail("4"));
        assert_eq!(app.pump_navigation(), 1);
        assert_eq!(app.route(), &RouteState::home());
    }

    #[test]
    fn back_or_home_without_history_goes_home() {
        let mut app = make_app("/car-detail/zz");
        app.back_or_home();
        assert_eq!(app.route(), &RouteState::home());

        app.open_vehicle("3");
        app.back_or_home();
        assert_eq!(app.route(), &RouteState::detail("3"));
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::home());
    }

    #[test]
    fn deep_link_to_missing_vehicle_has_no_record() {
        let app = make_app("/car-detail/__nonexistent__");
        assert_eq!(app.route().page, Page::CarDetail);
        assert!(app.current_vehicle().is_none());
    }

    #[test]
    fn address_bar_navigation_reparses_location() {
        let mut app = make_app("/");
        app.open_address_bar();
        assert_eq!(app.address().buffer(), Some("/"));
        for ch in "car-detail/7".chars() {
            app.dispatch_address(AddressIntent::Insert(ch));
        }
        app.submit_address();
        assert!(!app.address().is_editing());
        assert_eq!(app.route(), &RouteState::home());
        app.pump_navigation();
        assert_eq!(app.route(), &RouteState::detail("7"));
        assert_eq!(app.current_vehicle().map(|v| v.model.as_str()), Some("LX LX600"));
    }
}
