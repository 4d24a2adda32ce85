mod state;

use contracts::domain::a008_feedback::{Feedback, FeedbackKind, FeedbackStatus};
use contracts::shared::summary::{average, count_where};
use contracts::system::auth::ApiScope;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

use super::details::ResolveFeedbackForm;
use crate::shared::api_utils::log_local_call;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::ListPager;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_number_with_decimals, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::list_state::ListSignals;
use crate::shared::list_utils::{highlight_matches, CategoryFilter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackUpdateRequest<'a> {
    feedback_id: &'a str,
    status: FeedbackStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a str>,
}

fn status_color(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::New => "warning",
        FeedbackStatus::InProgress => "brand",
        FeedbackStatus::Resolved => "success",
    }
}

fn filter_label(code: &str) -> String {
    let label = match code {
        "FEEDBACK" => FeedbackKind::Feedback.label(),
        "COMPLAINT" => FeedbackKind::Complaint.label(),
        "NEW" => FeedbackStatus::New.label(),
        "IN_PROGRESS" => FeedbackStatus::InProgress.label(),
        "RESOLVED" => FeedbackStatus::Resolved.label(),
        other => other,
    };
    label.to_string()
}

fn stars(rating: Option<u8>) -> String {
    match rating {
        Some(r) => {
            let r = r.min(5) as usize;
            format!("{}{}", "★".repeat(r), "☆".repeat(5 - r))
        }
        None => "-".to_string(),
    }
}

#[component]
pub fn FeedbackList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let resolving: RwSignal<Option<Feedback>> = RwSignal::new(None);
    let filters_expanded = RwSignal::new(true);

    let start = move |feedback_id: String| {
        let result = state
            .try_update(|s| {
                s.edit_row(|f| f.feedback_id == feedback_id, |f| {
                    f.start();
                    Ok(())
                })
            })
            .unwrap_or_else(|| Err("Feedback list is gone".to_string()));
        match result {
            Ok(()) => log_local_call(
                &ApiScope::Dealer.endpoint("feedback/update"),
                &FeedbackUpdateRequest {
                    feedback_id: &feedback_id,
                    status: FeedbackStatus::InProgress,
                    response: None,
                },
            ),
            Err(e) => set_error.set(Some(e)),
        }
    };

    let resolve = Callback::new(move |response: String| {
        let Some(feedback_id) = resolving.with_untracked(|f| f.as_ref().map(|f| f.feedback_id.clone())) else {
            return Err("No feedback selected".to_string());
        };
        state
            .try_update(|s| s.edit_row(|f| f.feedback_id == feedback_id, |f| f.resolve(&response)))
            .unwrap_or_else(|| Err("Feedback list is gone".to_string()))?;
        log_local_call(
            &ApiScope::Dealer.endpoint("feedback/update"),
            &FeedbackUpdateRequest {
                feedback_id: &feedback_id,
                status: FeedbackStatus::Resolved,
                response: Some(response.trim()),
            },
        );
        Ok(())
    });

    let open_count = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| count_where(rows, |f| f.status != FeedbackStatus::Resolved)))
    });
    let average_rating = Memo::new(move |_| {
        state.with(|s| s.view.summarize(|rows| average(rows.iter().filter_map(|f| f.rating.map(f64::from)))))
    });

    let query = state.query();
    let sort = state.sort();
    let on_sort = state.on_sort();
    let rows = state.page_rows();

    view! {
        <PageFrame page_id="a008_feedback--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Feedback & Complaints"</h1>
                    <Badge>{move || state.with(|s| s.view.total_count()).to_string()}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="alert alert--info">"Sample data: changes stay in this tab."</div>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-strip">
                    <StatCard
                        label="Open items"
                        icon_name="message-square"
                        value=Signal::derive(move || open_count.get().to_string())
                        tone=Signal::derive(move || if open_count.get() > 0 { StatTone::Warning } else { StatTone::Good })
                    />
                    <StatCard
                        label="Average rating"
                        icon_name="trending-up"
                        value=Signal::derive(move || {
                            average_rating
                                .get()
                                .map(|a| format!("{} / 5", format_number_with_decimals(a, 1)))
                                .unwrap_or_else(|| "-".to_string())
                        })
                    />
                </div>

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=state.active_filters()
                    pagination_controls=move || view! { <ListPager state=state /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput
                                    value=state.query()
                                    on_change=state.on_query()
                                    placeholder="Customer, subject, text..."
                                />
                            </div>
                            <CategoryFilter
                                label="Type"
                                options=state.category_options("kind")
                                selected=state.category("kind")
                                on_change=state.on_category("kind")
                                display=filter_label
                            />
                            <CategoryFilter
                                label="Status"
                                options=state.category_options("status")
                                selected=state.category("status")
                                on_change=state.on_category("status")
                                display=filter_label
                            />
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:id="a008-feedback-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="#" sort_field="feedback_id" sort=sort on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer" sort=sort on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=90.0>"Type"</TableHeaderCell>
                                <SortableHeaderCell label="Subject" sort_field="subject" sort=sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Rating" sort_field="rating" sort=sort on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Received" sort_field="created_date" sort=sort on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Status" sort_field="status" sort=sort on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=150.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|f: &Feedback| (f.feedback_id.clone(), f.status.code())
                                children=move |feedback| {
                                    let customer = feedback.customer_name.clone();
                                    let subject = feedback.subject.clone();
                                    let id_for_start = feedback.feedback_id.clone();
                                    let for_resolve = feedback.clone();
                                    let status = feedback.status;
                                    let feedback_id = feedback.feedback_id.clone();
                                    let kind_label = feedback.kind.label();
                                    let response = feedback.response.clone().unwrap_or_default();
                                    let rating = stars(feedback.rating);
                                    let created = format_date(&feedback.created_date);
                                    let kind_color = match feedback.kind {
                                        FeedbackKind::Complaint => "danger",
                                        FeedbackKind::Feedback => "informative",
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{feedback_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{move || highlight_matches(&customer, &query.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=kind_label color=kind_color />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span title=response>
                                                        {move || highlight_matches(&subject, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{rating}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=status.label() color=status_color(status) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {(status == FeedbackStatus::New).then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| start(id_for_start.clone())
                                                        >
                                                            "Start"
                                                        </Button>
                                                    })}
                                                    {(status != FeedbackStatus::Resolved).then(|| view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| resolving.set(Some(for_resolve.clone()))
                                                        >
                                                            "Resolve"
                                                        </Button>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || resolving.get().map(|feedback| view! {
                <ResolveFeedbackForm
                    feedback=feedback
                    on_close=move || resolving.set(None)
                    on_resolve=resolve
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(Some(4)), "★★★★☆");
        assert_eq!(stars(Some(9)), "★★★★★");
        assert_eq!(stars(None), "-");
    }

    #[test]
    fn test_update_request_skips_empty_response() {
        let body = FeedbackUpdateRequest {
            feedback_id: "FB-301",
            status: FeedbackStatus::InProgress,
            response: None,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["status"], "IN_PROGRESS");
        assert!(v.get("response").is_none());
    }
}
