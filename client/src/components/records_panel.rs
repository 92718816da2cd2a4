//! Records section: searchable, tabbed tables over the catalog collections.
//!
//! DESIGN
//! ======
//! The search box edits the query of whichever tab is active, so each tab
//! keeps its own filter text across tab switches. Export and Add Record are
//! rendered but inert.

#[cfg(test)]
#[path = "records_panel_test.rs"]
mod records_panel_test;

use leptos::prelude::*;
use portal::records::{ClinicalCase, PatientRecord, Procedure};
use portal::{Collection, RecordCatalog, RecordEntry};

use crate::components::status_badge::{Badge, StatusBadge};

fn column_headers(collection: Collection) -> &'static [&'static str] {
    match collection {
        Collection::Patients => &["Record ID", "Patient ID", "Diagnosis", "Date", "Attending", "Specialty", "Status"],
        Collection::Procedures => &["Record ID", "Procedure", "Date", "Supervisor", "Specialty", "Hours", "Outcome"],
        Collection::Cases => &["Case ID", "Title", "Presentation", "Date", "Complexity", "Reflection"],
    }
}

fn hours_label(hours: f64) -> String {
    format!("{hours:.1} hrs")
}

fn search_placeholder(collection: Collection) -> String {
    format!("Search {}...", collection.label().to_lowercase())
}

fn empty_message(catalog: &RecordCatalog, collection: Collection) -> &'static str {
    if catalog.len(collection) == 0 { "No records yet." } else { "No records match your search." }
}

#[component]
pub fn RecordsPanel() -> impl IntoView {
    let catalog = expect_context::<RwSignal<RecordCatalog>>();

    let active = move || catalog.with(RecordCatalog::active_tab);
    let query = move || catalog.with(|c| c.query(c.active_tab()).to_owned());
    let on_search = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        catalog.update(|c| {
            let tab = c.active_tab();
            c.set_query(tab, text);
        });
    };

    let rows = move || {
        catalog.with(|c| {
            let tab = c.active_tab();
            let visible: Vec<RecordEntry> = c.visible_entries(tab).into_iter().cloned().collect();
            (tab, visible, empty_message(c, tab))
        })
    };

    view! {
        <div class="records">
            <div class="records__header">
                <div>
                    <h2>"Medical Records"</h2>
                    <p class="muted">"Manage your patient records, procedures, and clinical cases"</p>
                </div>
                <div class="records__actions">
                    <button class="btn btn--outline" type="button">"Export"</button>
                    <button class="btn btn--primary" type="button">"Add Record"</button>
                </div>
            </div>

            <div class="records__search">
                <input
                    class="input"
                    type="search"
                    placeholder=move || search_placeholder(active())
                    prop:value=query
                    on:input=on_search
                />
            </div>

            <div class="tabs" role="tablist">
                {Collection::ALL
                    .into_iter()
                    .map(|collection| {
                        view! {
                            <button
                                class="tabs__trigger"
                                role="tab"
                                class:tabs__trigger--active=move || active() == collection
                                on:click=move |_| catalog.update(|c| c.select_tab(collection))
                            >
                                {collection.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="card">
                <h3>{move || active().label()}</h3>
                <p class="muted">{move || active().description()}</p>
                {move || {
                    let (tab, visible, empty) = rows();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {column_headers(tab)
                                        .iter()
                                        .map(|h| view! { <th>{*h}</th> })
                                        .collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                {visible
                                    .is_empty()
                                    .then(|| {
                                        view! {
                                            <tr>
                                                <td class="table__empty" colspan=column_headers(tab).len().to_string()>
                                                    {empty}
                                                </td>
                                            </tr>
                                        }
                                    })}
                                {visible.into_iter().map(entry_row).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                }}
            </section>
        </div>
    }
}

fn entry_row(entry: RecordEntry) -> AnyView {
    match entry {
        RecordEntry::Patient(record) => patient_row(record).into_any(),
        RecordEntry::Procedure(procedure) => procedure_row(procedure).into_any(),
        RecordEntry::Case(case) => case_row(case).into_any(),
    }
}

fn patient_row(record: PatientRecord) -> impl IntoView {
    view! {
        <tr>
            <td class="table__id">{record.id}</td>
            <td>{record.patient_id}</td>
            <td>{record.diagnosis}</td>
            <td>{record.date}</td>
            <td>{record.attending}</td>
            <td>{record.specialty}</td>
            <td><StatusBadge tag=record.status/></td>
        </tr>
    }
}

fn procedure_row(procedure: Procedure) -> impl IntoView {
    view! {
        <tr>
            <td class="table__id">{procedure.id}</td>
            <td>{procedure.name}</td>
            <td>{procedure.date}</td>
            <td>{procedure.supervisor}</td>
            <td>{procedure.specialty}</td>
            <td>{hours_label(procedure.hours)}</td>
            <td><StatusBadge tag=procedure.outcome/></td>
        </tr>
    }
}

fn case_row(case: ClinicalCase) -> impl IntoView {
    let complexity = portal::classify_status(&case.complexity);
    view! {
        <tr>
            <td class="table__id">{case.id}</td>
            <td>
                <p>{case.title}</p>
                <p class="muted">{case.learning_objectives}</p>
            </td>
            <td>{case.presentation}</td>
            <td>{case.date}</td>
            <td><Badge variant=complexity label=case.complexity/></td>
            <td><StatusBadge tag=case.reflection_status/></td>
        </tr>
    }
}
