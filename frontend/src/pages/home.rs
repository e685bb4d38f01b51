use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::contact_popup::ContactFormPopup;
use crate::components::faq::Faq;
use crate::components::featured_work::FeaturedWork;
use crate::components::footer::Footer;
use crate::components::gallery_section::GallerySection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::scrolling_gallery::ScrollingGallery;
use crate::components::social_overlay::SocialOverlay;
use crate::components::testimonials::Testimonials;
use crate::components::vision_mission::VisionMission;
use crate::components::why_hire_me::WhyHireMe;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <About />
                <VisionMission />
                <WhyHireMe />
                <FeaturedWork />
                <ScrollingGallery />
                <GallerySection />
                <Testimonials />
                <Faq />
                <ContactForm />
            </main>
            <Footer />
            <SocialOverlay />
            <ContactFormPopup />
        </div>
    }
}
