//! 英文翻译 (en-US)

use super::keys::{
    AuthModalTexts, CommonTexts, CreateEventTexts, DetailsTexts, DiscoverTexts, HintTexts,
    ModalTexts, NavTexts, OverviewTexts, ProfileTexts, StatusBarTexts, Translations,
    WelcomeTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "StudentConnect",
        confirm: "Confirm",
        cancel: "Cancel",
        close: "Close",
        back: "Back",
        next: "Next",
        prev: "Previous",
        search: "Search",
        all: "All",
        error: "Error",
        optional: "optional",
    },

    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        search: "Search",
        filter: "Filter",
        next_step: "Next step",
        prev_step: "Previous step",
        submit: "Submit",
        select_file: "Load preview",
        theme: "Theme",
        language: "Language",
        help: "Help",
        quit: "Quit",
        login: "Log in",
    },

    nav: NavTexts {
        title: "Menu",
        overview: "Dashboard",
        create_event: "Create Event",
        profile: "Profile",
        discover: "Discover",
        event_details: "Event Details",
        about: "About",
        logout: "Logout",
    },

    welcome: WelcomeTexts {
        title: "Welcome to StudentConnect",
        subtitle: "Discover hackathons, workshops and internships, or host your own",
        login_hint: "Press Enter to log in or sign up",
    },

    overview: OverviewTexts {
        total: "Total Events",
        pending: "Pending",
        approved: "Approved",
        my_events: "My Events",
        no_events: "No events match your search.",
        col_title: "Title",
        col_category: "Category",
        col_date: "Date",
        col_status: "Status",
    },

    discover: DiscoverTexts {
        search_placeholder: "Search by title, organizer or location...",
        filter: "Category",
        no_events: "No events found.",
        organizer: "Organizer",
        location: "Location",
    },

    details: DetailsTexts {
        about: "About this event",
        topics: "What you'll learn",
        time: "Time",
        mode: "Mode",
        price: "Price",
        speaker: "Speaker",
        participants: "Participants",
        date: "Date",
        no_selection: "Select an event from Discover to see its details.",
    },

    create_event: CreateEventTexts {
        step: "Step",
        step_basics: "Basic Info",
        step_schedule: "Schedule",
        step_details: "Details",
        step_media: "Media",
        submit: "Submit Event",
        submitting: "Submitting...",
        title: "Event Title",
        category: "Category",
        description: "Description",
        date: "Date (YYYY-MM-DD)",
        time: "Time (HH:MM)",
        location: "Location",
        event_link: "Event Link",
        contact_email: "Contact Email",
        requirements: "Requirements",
        prizes: "Prizes",
        flyer: "Flyer Image",
        flyer_hint: "Path to an image file, Enter to preview",
        preview_ready: "Flyer preview loaded",
    },

    profile: ProfileTexts {
        name: "Full Name",
        mobile: "Mobile",
        avatar: "Avatar",
        avatar_hint: "Path to an image file, Enter to preview",
        save: "Save Changes",
        saving: "Saving...",
        preview_ready: "Avatar preview loaded",
    },

    modal: ModalTexts {
        auth: AuthModalTexts {
            title: "Welcome",
            student: "Student",
            organizer: "Organizer",
            login: "Login",
            signup: "Sign Up",
            email: "Email",
            password: "Password",
            confirm_password: "Confirm Password",
            show_password: "Show",
            hide_password: "Hide",
            switch_tab: "Student / Organizer",
            switch_mode: "Login / Sign Up",
        },
        logout_title: "Logout",
        logout_message: "Are you sure you want to logout?",
        about_title: "About StudentConnect",
        about_body: "StudentConnect brings students and event organizers together. \
                     Organizers publish hackathons, workshops and internships; \
                     students discover and join them.",
        help_title: "Keyboard Shortcuts",
        help_lines: &[
            ("Tab", "Switch between menu and content"),
            ("↑↓", "Move selection / field"),
            ("Enter", "Open / confirm"),
            ("/", "Search events"),
            ("←→", "Change category"),
            ("Alt+n / Alt+p", "Next / previous form step"),
            ("Alt+s", "Submit form"),
            ("Alt+r", "Reload events"),
            ("Alt+t", "Toggle theme"),
            ("Alt+l", "Toggle language"),
            ("Esc", "Back / close"),
            ("Alt+q", "Quit"),
        ],
        notice_title: "Notice",
    },

    status_bar: StatusBarTexts {
        refreshed: "Events reloaded",
        auto_refresh: "Auto-refresh",
        auto_refresh_paused: "paused",
        event_submitted: "Event submitted for review",
        profile_saved: "Profile saved",
        welcome_back: "Logged in",
    },
};
