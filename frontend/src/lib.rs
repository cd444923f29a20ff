pub mod config;
pub mod validation;
pub mod slider {
    pub mod autoplay;
    pub mod controller;
    pub mod indicator;
}
pub mod components {
    pub mod contact_form;
    pub mod hero_slider;
    pub mod lightbox;
    pub mod nav;
}
pub mod pages {
    pub mod home;
}
