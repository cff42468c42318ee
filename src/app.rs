//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::pages::application_detail::ApplicationDetailPage;
use crate::pages::application_form::{AddApplicationPage, UpdateApplicationPage};
use crate::pages::applications::ApplicationsPage;
use crate::pages::calendar::{CalendarEventsAddPage, CalendarEventsPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::{HomePage, NotFoundRedirect};
use crate::pages::interview_detail::InterviewDetailPage;
use crate::pages::interview_form::{AddInterviewPage, UpdateInterviewPage};
use crate::pages::interviews::InterviewsPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reminder_detail::ReminderDetailPage;
use crate::pages::reminder_form::{AddReminderPage, UpdateReminderPage};
use crate::pages::reminders::RemindersPage;
use crate::pages::signup::SignupPage;
use crate::state::session::Session;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
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

/// Root application component.
///
/// Provides the session store and UI state contexts, installs the session
/// bootstrap, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Apply the persisted dark-mode preference on startup.
    #[cfg(feature = "hydrate")]
    {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    }

    // Re-resolve the session user whenever the token value changes
    // (login, signup, logout).
    Effect::new(move || {
        let token = session.token.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let resolved = crate::state::session::bootstrap(token).await;
            session.state.set(resolved);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/job-jotter.css"/>
        <Title text="Job Jotter"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundRedirect/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>

                <Route path=StaticSegment("applications") view=ApplicationsPage/>
                <Route
                    path=(StaticSegment("applications"), StaticSegment("new"))
                    view=AddApplicationPage
                />
                <Route
                    path=(StaticSegment("applications"), ParamSegment("id"))
                    view=ApplicationDetailPage
                />
                <Route
                    path=(StaticSegment("applications"), ParamSegment("id"), StaticSegment("update"))
                    view=UpdateApplicationPage
                />

                <Route path=StaticSegment("interviews") view=InterviewsPage/>
                <Route path=(StaticSegment("interviews"), StaticSegment("add")) view=AddInterviewPage/>
                <Route
                    path=(StaticSegment("interviews"), ParamSegment("id"))
                    view=InterviewDetailPage
                />
                <Route
                    path=(StaticSegment("interviews"), ParamSegment("id"), StaticSegment("update"))
                    view=UpdateInterviewPage
                />

                <Route path=StaticSegment("reminders") view=RemindersPage/>
                <Route path=(StaticSegment("reminders"), StaticSegment("add")) view=AddReminderPage/>
                <Route path=(StaticSegment("reminders"), ParamSegment("id")) view=ReminderDetailPage/>
                <Route
                    path=(StaticSegment("reminders"), ParamSegment("id"), StaticSegment("update"))
                    view=UpdateReminderPage
                />

                <Route
                    path=(StaticSegment("google-calendar"), StaticSegment("events"))
                    view=|| view! { <CalendarEventsPage/> }
                />
                <Route
                    path=(StaticSegment("google-calendar"), StaticSegment("events"), StaticSegment("add"))
                    view=CalendarEventsAddPage
                />

                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
