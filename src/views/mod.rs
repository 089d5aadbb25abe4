pub mod google_auth;
pub mod register_page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
        }
    }
}
