//! Static navigation graphs and their destinations.
//!
//! DESIGN
//! ======
//! Graphs are defined once as `'static` data and never mutated. Order and
//! membership of destinations per graph are part of the app's contract with
//! its tests; destination names are unique within a graph and role graphs
//! never share a name.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

/// Identifies which graph a session resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Signed-out screens (login, signup, recovery, role preview).
    Auth,
    /// Signed in but no role picked yet; only role selection is reachable.
    RoleSelect,
    Teacher,
    Student,
    Parent,
}

/// A named, navigable screen within a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    /// Unique within the owning graph.
    pub name: &'static str,
    /// Absolute route path.
    pub path: &'static str,
    /// Tab-bar / link label.
    pub label: &'static str,
    /// Icon identifier consumed by the tab bar.
    pub icon: &'static str,
}

/// Routing failures surfaced to navigation callers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// A destination name not present in the graph was requested.
    #[error("unknown destination {name:?} in {kind:?} graph")]
    UnknownDestination { kind: GraphKind, name: String },
}

/// An ordered set of destinations reachable in one session state.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteGraph {
    pub kind: GraphKind,
    destinations: &'static [Destination],
}

impl RouteGraph {
    #[must_use]
    pub fn destinations(&self) -> &'static [Destination] {
        self.destinations
    }

    /// The destination mounted first when this graph becomes active.
    ///
    /// Graphs are non-empty by construction (asserted in tests), so this
    /// cannot fail at runtime.
    #[must_use]
    pub fn initial(&self) -> &'static Destination {
        &self.destinations[0]
    }

    /// Look up a destination by name.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownDestination`] when no destination in
    /// this graph carries `name`.
    pub fn find(&self, name: &str) -> Result<&'static Destination, RoutingError> {
        self.destinations
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| RoutingError::UnknownDestination {
                kind: self.kind,
                name: name.to_owned(),
            })
    }

    /// Whether `path` is one of this graph's destination paths.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.destinations.iter().any(|d| d.path == path)
    }
}

/// Screens reachable while signed out.
pub static AUTH: RouteGraph = RouteGraph {
    kind: GraphKind::Auth,
    destinations: &[
        Destination { name: "Login", path: "/login", label: "Log In", icon: "key" },
        Destination { name: "SignUp", path: "/signup", label: "Sign Up", icon: "user-plus" },
        Destination {
            name: "ForgotPassword",
            path: "/forgot-password",
            label: "Forgot Password",
            icon: "lifebuoy",
        },
        Destination {
            name: "RoleSelection",
            path: "/select-role",
            label: "Choose Role",
            icon: "switch",
        },
    ],
};

/// Fallback graph for a signed-in session with no role: the only way forward
/// is picking one.
pub static ROLE_SELECT: RouteGraph = RouteGraph {
    kind: GraphKind::RoleSelect,
    destinations: &[Destination {
        name: "RoleSelection",
        path: "/select-role",
        label: "Choose Role",
        icon: "switch",
    }],
};

pub static TEACHER: RouteGraph = RouteGraph {
    kind: GraphKind::Teacher,
    destinations: &[
        Destination { name: "Dashboard", path: "/teacher", label: "Dashboard", icon: "home" },
        Destination {
            name: "Schedule",
            path: "/teacher/schedule",
            label: "Schedule",
            icon: "calendar",
        },
        Destination {
            name: "Students",
            path: "/teacher/students",
            label: "Students",
            icon: "users",
        },
        Destination { name: "Profile", path: "/teacher/profile", label: "Profile", icon: "user" },
        Destination {
            name: "Settings",
            path: "/teacher/settings",
            label: "Settings",
            icon: "gear",
        },
    ],
};

pub static STUDENT: RouteGraph = RouteGraph {
    kind: GraphKind::Student,
    destinations: &[
        Destination {
            name: "StudentDashboard",
            path: "/student",
            label: "Dashboard",
            icon: "home",
        },
        Destination {
            name: "FindTutors",
            path: "/student/tutors",
            label: "Find Tutors",
            icon: "search",
        },
        Destination {
            name: "StudentSchedule",
            path: "/student/schedule",
            label: "Schedule",
            icon: "calendar",
        },
        Destination {
            name: "StudentProfile",
            path: "/student/profile",
            label: "Profile",
            icon: "user",
        },
        Destination {
            name: "StudentSettings",
            path: "/student/settings",
            label: "Settings",
            icon: "gear",
        },
    ],
};

pub static PARENT: RouteGraph = RouteGraph {
    kind: GraphKind::Parent,
    destinations: &[
        Destination {
            name: "ParentDashboard",
            path: "/parent",
            label: "Dashboard",
            icon: "home",
        },
        Destination {
            name: "ParentSchedule",
            path: "/parent/schedule",
            label: "Schedule",
            icon: "calendar",
        },
        Destination {
            name: "ParentPayments",
            path: "/parent/payments",
            label: "Payments",
            icon: "card",
        },
        Destination {
            name: "ParentProfile",
            path: "/parent/profile",
            label: "Profile",
            icon: "user",
        },
        Destination {
            name: "ParentSettings",
            path: "/parent/settings",
            label: "Settings",
            icon: "gear",
        },
    ],
};
