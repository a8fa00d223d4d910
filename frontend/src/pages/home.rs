use crate::{components::layout::Layout, pages::login::LoginPanel};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <main class="container mx-auto my-12 flex flex-col lg:flex-row lg:space-x-12 px-2">
                <div class="flex-1 rounded-lg bg-white p-8 shadow-md">
                    <div class="flex h-96 items-center justify-center text-gray-500 text-xl lg:text-2xl font-light">
                        "Image or Video" <br/> "of our services"
                    </div>
                </div>

                <div class="mt-8 w-full lg:mt-0 lg:w-96 text-gray-500 rounded-lg bg-white p-8 shadow-md">
                    <a href="/" class="text-2xl lg:text-3xl text-black text-center block">
                        "Drukland.de"
                    </a>
                    <h2 class="mt-5 text-center">"Sign In to your account"</h2>
                    <p class="mb-6 text-center text-sm text-gray-600">
                        "Don't you have an account? "
                        <a href="/register" class="text-black font-semibold hover:underline">
                            "Register"
                        </a>
                    </p>
                    <LoginPanel/>
                </div>
            </main>
        </Layout>
    }
}
