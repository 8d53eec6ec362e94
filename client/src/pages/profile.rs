//! Profile page: create or update the signed-in user's role-specific profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored profile is fetched on mount; a 404 means "no profile yet" and
//! yields an empty form. The form variant follows the session's role.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::app_header::AppHeader;
use crate::components::form_field::{FormField, field_error};
use crate::components::multi_select::MultiSelect;
use crate::forms::FieldErrors;
use crate::forms::profile::{
    AlumniProfileDraft, CAREER_INTERESTS, CommonProfileFields, EXPERTISE_FIELDS, ProfileDraft, StudentProfileDraft,
};
use crate::net::session_client::{ApiClient, ApiError};
use crate::net::types::{HelpType, ProfileData, Role};
use crate::state::auth::AuthSession;
use crate::state::form::SubmitPhase;
use crate::state::notify::{Notice, Notices};
#[cfg(feature = "hydrate")]
use crate::state::{
    form::settle,
    notify::{error_notice, notify},
};

/// Draft to edit once the profile query settles, and whether a stored
/// profile exists.
///
/// Failures other than 404 are logged and fall back to an empty form.
#[must_use]
pub fn prefill(role: Role, fetched: Result<Option<ProfileData>, ApiError>) -> (ProfileDraft, bool) {
    match fetched {
        Ok(existing) => (ProfileDraft::for_role(role, existing.as_ref()), existing.is_some()),
        Err(e) => {
            if !e.is_session_expired() {
                log::warn!("profile fetch failed: {e}");
            }
            (ProfileDraft::empty(role), false)
        }
    }
}

#[must_use]
pub fn saved_notice(role: Role) -> Notice {
    let description = match role {
        Role::Student => "Your student profile has been updated successfully",
        Role::Alumni => "Your alumni profile has been updated successfully",
    };
    Notice::success("Profile saved!", description)
}

fn options(values: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    values.iter().map(|value| (*value, *value)).collect()
}

fn help_options() -> Vec<(&'static str, &'static str)> {
    HelpType::ALL.iter().map(|kind| (kind.as_str(), kind.label())).collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let client = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<Notices>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let role = session.role().unwrap_or(Role::Student);
    let draft = RwSignal::new(ProfileDraft::empty(role));
    let fetching = RwSignal::new(true);
    let has_profile = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let busy = Signal::derive(move || !phase.get().can_submit());

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let (prefilled, exists) = prefill(role, client.fetch_my_profile().await);
            draft.try_set(prefilled);
            has_profile.try_set(exists);
            fetching.try_set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        phase.set(SubmitPhase::Validating);
        let validated = draft.with_untracked(ProfileDraft::validate);
        phase.set(SubmitPhase::after_validation(validated.is_ok()));
        let payload = match validated {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                payload
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = client.save_profile(&payload).await;
                if !settle(phase, &result) {
                    return;
                }
                match result {
                    Ok(()) => {
                        notify(notices, saved_notice(payload.role()));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        if let Some(notice) = error_notice(&e, "Error saving profile", "An error occurred") {
                            notify(notices, notice);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &client, notices);
    };

    let common_value = move |get: fn(&CommonProfileFields) -> String| {
        Signal::derive(move || draft.with(|d| get(d.common())))
    };
    let common_set = move |set: fn(&mut CommonProfileFields, String)| {
        Callback::new(move |value: String| draft.update(|d| set(d.common_mut(), value)))
    };

    let role_fields = move || match role {
        Role::Student => view! { <StudentFields draft=draft errors=errors busy=busy/> }.into_any(),
        Role::Alumni => view! { <AlumniFields draft=draft errors=errors busy=busy/> }.into_any(),
    };
    let description = match role {
        Role::Student => "Complete your profile to start requesting mentorship from alumni",
        Role::Alumni => "Share your expertise to help current DePauw students",
    };
    let year_placeholder = match role {
        Role::Student => "2025",
        Role::Alumni => "2015",
    };

    view! {
        <div class="page">
            <AppHeader/>
            <main class="page__main page__main--narrow">
                <Show
                    when=move || !fetching.get()
                    fallback=|| view! { <div class="gate-placeholder"><span class="spinner" aria-hidden="true"></span></div> }
                >
                    <section class="card">
                        <h2 class="card__title">
                            {move || if has_profile.get() { "Update Your Profile" } else { "Create Your Profile" }}
                        </h2>
                        <p class="card__description">{description}</p>
                        <form class="profile-form" on:submit=on_submit.clone() novalidate>
                            <FormField label="Graduation Year" required=true html_for="gradYear" error=field_error(errors, "gradYear")>
                                <DraftInput
                                    id="gradYear"
                                    input_type="number"
                                    placeholder=year_placeholder
                                    value=common_value(|c| c.grad_year.clone())
                                    on_input=common_set(|c, v| c.grad_year = v)
                                    disabled=busy
                                />
                            </FormField>
                            <FormField label="Major" required=true html_for="major" error=field_error(errors, "major")>
                                <DraftInput
                                    id="major"
                                    placeholder="Computer Science"
                                    value=common_value(|c| c.major.clone())
                                    on_input=common_set(|c, v| c.major = v)
                                    disabled=busy
                                />
                            </FormField>
                            <FormField label="About Me" html_for="aboutMe" error=field_error(errors, "aboutMe")>
                                <DraftInput
                                    id="aboutMe"
                                    multiline=true
                                    placeholder="Tell us about yourself..."
                                    value=common_value(|c| c.about_me.clone())
                                    on_input=common_set(|c, v| c.about_me = v)
                                    disabled=busy
                                />
                            </FormField>
                            {role_fields()}
                            <FormField
                                label="LinkedIn Profile"
                                required=true
                                html_for="linkedinProfile"
                                error=field_error(errors, "linkedinProfile")
                            >
                                <DraftInput
                                    id="linkedinProfile"
                                    placeholder="https://linkedin.com/in/yourprofile"
                                    value=common_value(|c| c.linkedin_profile.clone())
                                    on_input=common_set(|c, v| c.linkedin_profile = v)
                                    disabled=busy
                                />
                            </FormField>
                            <div class="form-actions">
                                <A href="/dashboard" attr:class="btn btn--outline">"Cancel"</A>
                                <button class="btn btn--primary" type="submit" disabled=busy>
                                    {move || phase.get().button_label("Save Profile", "Saving...")}
                                </button>
                            </div>
                        </form>
                    </section>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn StudentFields(draft: RwSignal<ProfileDraft>, errors: RwSignal<FieldErrors>, busy: Signal<bool>) -> impl IntoView {
    let value = move |get: fn(&StudentProfileDraft) -> String| {
        Signal::derive(move || draft.with(|d| d.as_student().map(get).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut StudentProfileDraft, String)| {
        Callback::new(move |v: String| {
            draft.update(|d| {
                if let Some(student) = d.as_student_mut() {
                    apply(student, v);
                }
            });
        })
    };
    let interests = Signal::derive(move || {
        draft.with(|d| d.as_student().map(|s| s.career_interests.clone()).unwrap_or_default())
    });
    let on_interests = Callback::new(move |next: Vec<String>| {
        draft.update(|d| {
            if let Some(student) = d.as_student_mut() {
                student.career_interests = next;
            }
        });
    });

    view! {
        <FormField label="Career Interests" required=true error=field_error(errors, "careerInterests")>
            <MultiSelect
                name="career"
                options=options(&CAREER_INTERESTS)
                selected=interests
                on_change=on_interests
                disabled=busy
            />
        </FormField>
        <FormField label="Resume URL (Optional)" html_for="resumeUrl" error=field_error(errors, "resumeUrl")>
            <DraftInput
                id="resumeUrl"
                placeholder="https://s3.amazonaws.com/..."
                value=value(|s| s.resume_url.clone())
                on_input=set(|s, v| s.resume_url = v)
                disabled=busy
            />
        </FormField>
    }
}

#[component]
fn AlumniFields(draft: RwSignal<ProfileDraft>, errors: RwSignal<FieldErrors>, busy: Signal<bool>) -> impl IntoView {
    let value = move |get: fn(&AlumniProfileDraft) -> String| {
        Signal::derive(move || draft.with(|d| d.as_alumni().map(get).unwrap_or_default()))
    };
    let set = move |apply: fn(&mut AlumniProfileDraft, String)| {
        Callback::new(move |v: String| {
            draft.update(|d| {
                if let Some(alumni) = d.as_alumni_mut() {
                    apply(alumni, v);
                }
            });
        })
    };
    let expertise = Signal::derive(move || {
        draft.with(|d| d.as_alumni().map(|a| a.fields_of_expertise.clone()).unwrap_or_default())
    });
    let on_expertise = Callback::new(move |next: Vec<String>| {
        draft.update(|d| {
            if let Some(alumni) = d.as_alumni_mut() {
                alumni.fields_of_expertise = next;
            }
        });
    });
    let help = Signal::derive(move || {
        draft.with(|d| {
            d.as_alumni()
                .map(|a| a.willingness_to_help.iter().map(|kind| kind.as_str().to_owned()).collect())
                .unwrap_or_default()
        })
    });
    let on_help = Callback::new(move |next: Vec<String>| {
        draft.update(|d| {
            if let Some(alumni) = d.as_alumni_mut() {
                alumni.willingness_to_help = next.iter().filter_map(|raw| raw.parse().ok()).collect();
            }
        });
    });

    view! {
        <FormField label="Current Company" required=true html_for="currentCompany" error=field_error(errors, "currentCompany")>
            <DraftInput
                id="currentCompany"
                placeholder="Goldman Sachs"
                value=value(|a| a.current_company.clone())
                on_input=set(|a, v| a.current_company = v)
                disabled=busy
            />
        </FormField>
        <FormField label="Job Title" required=true html_for="jobTitle" error=field_error(errors, "jobTitle")>
            <DraftInput
                id="jobTitle"
                placeholder="Vice President"
                value=value(|a| a.job_title.clone())
                on_input=set(|a, v| a.job_title = v)
                disabled=busy
            />
        </FormField>
        <FormField label="Fields of Expertise" required=true error=field_error(errors, "fieldsOfExpertise")>
            <MultiSelect
                name="expertise"
                options=options(&EXPERTISE_FIELDS)
                selected=expertise
                on_change=on_expertise
                disabled=busy
            />
        </FormField>
        <FormField label="Willing to Help With" required=true error=field_error(errors, "willingnessToHelp")>
            <MultiSelect name="help" options=help_options() selected=help on_change=on_help disabled=busy/>
        </FormField>
    }
}

/// Text input or textarea bound to one draft field.
#[component]
fn DraftInput(
    id: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    if multiline {
        view! {
            <textarea
                id=id
                class="input input--multiline"
                rows="4"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                class="input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        }
        .into_any()
    }
}
