//! Application shell: context providers, router, and graph-aware chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the `SessionState` signal and hands it down via context;
//! screens never reach for a global. Route membership mirrors the static
//! graphs in `nav::graph` — every destination there has exactly one route
//! here, and the fallback surfaces unknown paths as routing errors.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, path};

use crate::components::tab_bar::TabBar;
use crate::data;
use crate::nav::{GraphKind, resolve_graph};
use crate::pages::auth::forgot_password::ForgotPasswordPage;
use crate::pages::auth::login::LoginPage;
use crate::pages::auth::role_selection::RoleSelectionPage;
use crate::pages::auth::signup::SignUpPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::parent::dashboard::ParentDashboardPage;
use crate::pages::parent::payments::ParentPaymentsPage;
use crate::pages::parent::profile::ParentProfilePage;
use crate::pages::parent::schedule::ParentSchedulePage;
use crate::pages::parent::settings::ParentSettingsPage;
use crate::pages::student::dashboard::StudentDashboardPage;
use crate::pages::student::find_tutors::FindTutorsPage;
use crate::pages::student::profile::StudentProfilePage;
use crate::pages::student::schedule::StudentSchedulePage;
use crate::pages::student::settings::StudentSettingsPage;
use crate::pages::teacher::dashboard::TeacherDashboardPage;
use crate::pages::teacher::profile::TeacherProfilePage;
use crate::pages::teacher::schedule::TeacherSchedulePage;
use crate::pages::teacher::settings::TeacherSettingsPage;
use crate::pages::teacher::students::TeacherStudentsPage;
use crate::state::auth::SessionState;
use crate::state::directory::DirectoryState;
use crate::state::payments::PaymentsState;
use crate::state::roster::RosterState;
use crate::state::schedule::ScheduleState;
use crate::state::ui::UiState;
use crate::util::clock;

/// HTML document shell used by SSR.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let schedule = RwSignal::new(ScheduleState { lessons: data::mock_lessons(clock::now_ms()) });
    let roster = RwSignal::new(RosterState { items: data::mock_students(), query: String::new() });
    let directory = RwSignal::new(DirectoryState {
        items: data::mock_tutors(),
        query: String::new(),
        subject: None,
    });
    let payments = RwSignal::new(PaymentsState { items: data::mock_payments() });

    provide_context(auth);
    provide_context(ui);
    provide_context(schedule);
    provide_context(roster);
    provide_context(directory);
    provide_context(payments);

    // Resolve the real session once the browser takes over; SSR renders the
    // loading state.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.set(SessionState::resolved(user));
        });

        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    }

    view! {
        <Title text="TutorLink"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomeRedirect/>
                    // Auth graph
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignUpPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/select-role") view=RoleSelectionPage/>
                    // Teacher graph
                    <Route path=path!("/teacher") view=TeacherDashboardPage/>
                    <Route path=path!("/teacher/schedule") view=TeacherSchedulePage/>
                    <Route path=path!("/teacher/students") view=TeacherStudentsPage/>
                    <Route path=path!("/teacher/profile") view=TeacherProfilePage/>
                    <Route path=path!("/teacher/settings") view=TeacherSettingsPage/>
                    // Student graph
                    <Route path=path!("/student") view=StudentDashboardPage/>
                    <Route path=path!("/student/tutors") view=FindTutorsPage/>
                    <Route path=path!("/student/schedule") view=StudentSchedulePage/>
                    <Route path=path!("/student/profile") view=StudentProfilePage/>
                    <Route path=path!("/student/settings") view=StudentSettingsPage/>
                    // Parent graph
                    <Route path=path!("/parent") view=ParentDashboardPage/>
                    <Route path=path!("/parent/schedule") view=ParentSchedulePage/>
                    <Route path=path!("/parent/payments") view=ParentPaymentsPage/>
                    <Route path=path!("/parent/profile") view=ParentProfilePage/>
                    <Route path=path!("/parent/settings") view=ParentSettingsPage/>
                </Routes>
            </main>
            <ShellTabBar/>
        </Router>
    }
}

/// `/` resolves the session's graph and replaces itself with its initial
/// destination.
#[component]
fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            let target = resolve_graph(&state.session).initial().path;
            navigate(target, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <div class="app-loading">
            <p>"Loading..."</p>
        </div>
    }
}

/// Tab bar shown only inside role graphs; auth and role-selection screens
/// manage their own navigation.
#[component]
fn ShellTabBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionState>>();
    let show = move || {
        matches!(
            resolve_graph(&auth.get().session).kind,
            GraphKind::Teacher | GraphKind::Student | GraphKind::Parent
        )
    };

    view! {
        <Show when=show>
            <TabBar/>
        </Show>
    }
}
