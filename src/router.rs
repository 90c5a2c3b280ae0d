use std::collections::HashSet;

use dioxus::prelude::*;
use failure::{bail, format_err, ResultExt};

use crate::views::{ChatView, Login, Settings};

#[rustfmt::skip]
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},

    #[route("/chat")]
    ChatView {},

    #[route("/settings")]
    Settings {},
}

/// What a path in the route table resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// Render the view bound to this route.
    View(Route),

    /// Substitute another path before matching.
    Redirect(&'static str),
}

/// One entry of the declarative route table.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub target: Target,
}

/// The app's route table. Mirrors the `Route` enum and is checked against it at startup.
pub const ROUTE_TABLE: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/",
        target: Target::Redirect("/login"),
    },
    RouteDescriptor {
        path: "/login",
        target: Target::View(Route::Login {}),
    },
    RouteDescriptor {
        path: "/chat",
        target: Target::View(Route::ChatView {}),
    },
    RouteDescriptor {
        path: "/settings",
        target: Target::View(Route::Settings {}),
    },
];

/// Resolve a concrete URL path to the route it renders, following redirects.
///
/// Trailing slashes, query strings and fragments are accepted; matching is case-sensitive.
pub fn resolve(path: &str) -> Option<Route> {
    path.parse::<Route>().ok()
}

/// Check [`ROUTE_TABLE`] against the routable enum.
pub fn validate_route_table() -> Result<(), failure::Error> {
    validate_routes(&ROUTE_TABLE)
}

/// Check that a route table has well-formed, unique paths and that every entry
/// resolves the way the router will resolve it.
pub fn validate_routes(table: &[RouteDescriptor]) -> Result<(), failure::Error> {
    let shape = regex::Regex::new(r"^/([a-z0-9-]+(/[a-z0-9-]+)*)?$")
        .context("failed to compile path pattern")?;

    let mut seen = HashSet::new();

    for descriptor in table {
        let path = descriptor.path;

        if !shape.is_match(path) {
            bail!("route path `{}` is not a plain absolute path", path);
        }

        if !seen.insert(path) {
            bail!("route path `{}` is declared more than once", path);
        }

        let resolved =
            resolve(path).ok_or_else(|| format_err!("route path `{}` matches nothing", path))?;

        match &descriptor.target {
            Target::View(route) => {
                if &resolved != route {
                    bail!("`{}` resolves to {:?}, expected {:?}", path, resolved, route);
                }
            }
            Target::Redirect(to) => {
                if *to == path {
                    bail!("`{}` redirects to itself", path);
                }

                let expected = resolve(to)
                    .ok_or_else(|| format_err!("`{}` redirects to unknown path `{}`", path, to))?;

                if resolved != expected {
                    bail!(
                        "`{}` redirects to {:?}, expected {:?} via `{}`",
                        path,
                        resolved,
                        expected,
                        to
                    );
                }
            }
        }

        log::debug!("route `{}` -> {:?}", path, descriptor.target);
    }

    Ok(())
}
