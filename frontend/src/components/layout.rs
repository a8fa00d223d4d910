use leptos::*;

const BRAND: &str = "Drukland.de";

#[component]
pub fn UtilityBar() -> impl IntoView {
    let links = [
        ("/faq", "FAQ"),
        ("/inquiry", "Send Inquiry"),
        ("/support", "Live Support"),
        ("/contact", "Contact"),
    ];
    view! {
        <div class="bg-gray-100 py-2">
            <div class="container mx-auto flex justify-end space-x-5 text-sm text-gray-600 px-2">
                {links
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=href class="hover:text-gray-900 flex items-center gap-1">
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white py-3 border-b border-gray-400 text-gray-900">
            <div class="container mx-auto flex items-center justify-between">
                <a href="/" class="text-2xl lg:text-3xl font-bold text-black">
                    {BRAND}
                </a>
                <nav class="hidden md:flex space-x-8">
                    <a href="/business" class="hover:text-gray-600 flex items-center gap-1">
                        <span>"Business"</span>
                    </a>
                    <a href="/products" class="hover:text-gray-600 flex items-center gap-1">
                        <span>"Products"</span>
                    </a>
                    <a href="/about" class="hover:text-gray-600">
                        "About Us"
                    </a>
                </nav>
                <div class="flex items-center space-x-6">
                    <div class="relative hidden md:block">
                        <input
                            type="search"
                            placeholder="Search"
                            class="pl-10 pr-4 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-gray-500"
                        />
                    </div>
                    <div class="flex items-center space-x-4">
                        <a href="/cart" class="hover:text-gray-600">"Cart"</a>
                        <a href="/profile" class="hover:text-gray-600">"Profile"</a>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-auto border-t border-gray-200 py-6 container mx-auto px-2 h-min">
            <div class="flex flex-col items-center justify-between space-y-4 text-sm text-gray-600 md:flex-row md:space-y-0">
                <div>{format!("All rights reserved © 2024 | {}", BRAND)}</div>
                <div class="flex space-x-4">
                    <a href="/terms" class="hover:text-gray-900">"Terms of Use"</a>
                    <a href="/sitemap" class="hover:text-gray-900">"Sitemap"</a>
                    <a href="/company" class="hover:text-gray-900">"Company information"</a>
                    <a href="/cookie-settings" class="hover:text-gray-900">"Cookie settings"</a>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <UtilityBar/>
            <Header/>
            {children()}
            <Footer/>
        </div>
    }
}
