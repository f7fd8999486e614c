use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label,
};
use crate::models::{Filter, Note};
use crate::state::AppContext;
use leptos::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let board = app_state.0.board;
    let name = app_state.0.name_input;
    let status = app_state.0.status_input;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get_untracked();
        let status_val = status.get_untracked();

        // Only notify subscribers when a note was actually added.
        let added = board.try_maybe_update(|b| {
            let res = b.submit(&name_val, &status_val);
            (res.is_ok(), res)
        });

        match added {
            Some(Ok(_)) => {
                name.set(String::new());
                status.set(String::new());
            }
            Some(Err(e)) => log::debug!("submit ignored: {e}"),
            None => {}
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-md px-4 py-12">
                <Card>
                    <CardHeader>
                        <CardTitle class="text-xl">"Notes"</CardTitle>
                        <CardDescription>
                            {move || format!("{} total", board.with(|b| b.counts().all))}
                        </CardDescription>
                    </CardHeader>

                    <CardContent class="flex flex-col gap-6">
                        <form class="flex flex-col gap-4" on:submit=on_submit>
                            <div class="flex flex-col gap-2">
                                <Label html_for="note-name">"Name"</Label>
                                <Input
                                    id="note-name"
                                    test_id="input-note-name"
                                    placeholder="Study"
                                    bind_value=name
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="note-status">"Status"</Label>
                                <Input
                                    id="note-status"
                                    test_id="input-note-status"
                                    placeholder="active"
                                    bind_value=status
                                />
                            </div>

                            <Button class="w-full" attr:data-testid="submit-button">
                                "Add Note"
                            </Button>
                        </form>

                        <FilterBar />
                        <NoteList />
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let board = app_state.0.board;

    view! {
        <div class="flex items-center gap-1" role="group">
            {move || {
                let (current, counts) = board.with(|b| (b.filter(), b.counts()));
                Filter::iter()
                    .map(|filter| {
                        let selected = filter == current;
                        let variant = if selected { ButtonVariant::Selected } else { ButtonVariant::Ghost };
                        let pressed = if selected { "true" } else { "false" };
                        let test_id = filter.test_id();
                        let label = filter.to_string();
                        let count = counts.get(filter);
                        view! {
                            <Button
                                variant=variant
                                size=ButtonSize::Sm
                                attr:data-testid=test_id
                                attr:aria-pressed=pressed
                                on:click=move |_| board.update(|b| b.select(filter))
                            >
                                {label}
                                <span class="text-xs tabular-nums opacity-60">{count}</span>
                            </Button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Rebuilt from scratch on every board change.
#[component]
fn NoteList() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let board = app_state.0.board;

    view! {
        // Kept outside the list so an empty view leaves it childless.
        {move || {
            board
                .with(|b| b.empty_message())
                .map(|msg| view! {
                    <div data-testid="noteListEmpty" class="text-xs text-muted-foreground">{msg}</div>
                })
        }}

        <ul data-testid="noteList" class="flex flex-col gap-2">
            {move || {
                board
                    .with(|b| b.visible())
                    .into_iter()
                    .map(|note| view! { <NoteRow note=note /> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn NoteRow(note: Note) -> impl IntoView {
    let status_class = if note.is_completed() {
        "text-xs text-muted-foreground line-through"
    } else {
        "text-xs text-muted-foreground"
    };

    let seq = note.seq.to_string();

    view! {
        <li class="flex items-center justify-between rounded-md border px-4 py-3" data-seq=seq>
            <span class="text-sm font-medium">{note.name}</span>
            <span class=status_class>{note.status}</span>
        </li>
    }
}
