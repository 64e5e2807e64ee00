use crate::domain::a001_department::ui::keypad::DepartmentKeypadPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DepartmentKeypadPage />
        </ConfigProvider>
    }
}
