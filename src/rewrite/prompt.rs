// src/rewrite/prompt.rs

/// Builds the full prompt sent to the text-generation service for one unique
/// raw hours string. This module only formats text: no networking, no
/// pipeline logic.
pub fn build_rewrite_prompt(raw: &str, members: &[String], glossary: &str) -> String {
    let mut prompt = String::new();

    push_grammar_section(&mut prompt);
    push_glossary_section(&mut prompt, glossary);
    push_members_section(&mut prompt, members);
    push_input_section(&mut prompt, raw);

    prompt
}

fn push_grammar_section(prompt: &mut String) {
    prompt.push_str(
        "The format is defined as:\n\
[WEEKDAYS or DATE] [TIME SPAN]; [WEEKDAYS or DATE] [TIME SPAN];...\n\n\
WEEKDAYS: Valid weekdays use the first 2 letters of the English spelled day: \
Mo, Tu, We, Th, Fr, Sa, Su, and public holidays are represented as Ph.\n\n\
DATE: A specific day can be entered with this format: YYYY MMM DD, for \
example, 2017 Jan 2 or 2018 Oct 31.\n\n\
TIME SPAN: A time span can be two 24-hour times joined by a hyphen (-) or \
the word open, which means open 24 hours, or the word closed. Using a time \
span of two 24-hour times, use this format for the time: HH:MM, for example, \
10:00 (10:00 am) or 23:00 (11:00 pm). The time span could look like this: \
10:00-23:00, which means open from 10 am until 11 pm.\n\n\
Some full examples:\n\n\
\"Mo, Tu, We, Th, Fr open; Sa, Su closed\" specifies that we are open 24 \
hours Monday through Friday but closed on Saturday and Sunday.\n\n\
\"Mo 10:00-20:00; Tu 09:00-18:00; We closed; Th 08:00-17:00; Fr open; \
2017 Jan 1 closed; 2017 Dec 25 12:00-15:00\" specifies that we are open \
Monday from 10 am until 8 pm, open Tuesday from 9 am until 6 pm, closed \
Wednesday, open Thursday 8 am until 5 pm, open Friday from midnight Friday \
morning until midnight Saturday morning, closed January 1, 2017, and have \
shorter hours on December 25, 2017, from 12 noon until 3 pm.\n\n\
If instead you want to clear the hours of a location (generally with the \
intention that the store will follow the venue's hours), you can use the \
special value \"clear-hours\" to indicate this.\n\n",
    );
}

fn push_glossary_section(prompt: &mut String, glossary: &str) {
    if glossary.trim().is_empty() {
        return;
    }
    prompt.push_str("These are keywords that should be replaced:\n");
    prompt.push_str(glossary);
    prompt.push_str("\n\n");
}

fn push_members_section(prompt: &mut String, members: &[String]) {
    if members.is_empty() {
        return;
    }
    prompt.push_str("This schedule belongs to the following locations: ");
    prompt.push_str(&members.join(", "));
    prompt.push_str(
        ".\nAfter the reformatted rules, echo these location names in \
parentheses, exactly as written above.\n\n",
    );
}

fn push_input_section(prompt: &mut String, raw: &str) {
    prompt.push_str("Reformat the following opening-hours string:\n");
    prompt.push_str(raw);
    prompt.push_str(
        "\n\nOnly output the reformatted string and nothing else, not even a \
message. This output will be used in code.\n",
    );
}
