pub static LAYOUT : &'static str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<link rel="stylesheet" href="{{context}}/assets/wordnet.css">
</head>
<body>
<form class="search" action="{{context}}/search" method="get">
<select name="index">
<option value="lemma"{{#if lemma_selected}} selected{{/if}}>Lemma</option>
<option value="id"{{#unless lemma_selected}} selected{{/unless}}>Synset ID</option>
</select>
<input type="text" name="key" value="{{key}}">
<button type="submit">Search</button>
</form>
{{{body}}}
</body>
</html>
"#;

pub static SYNSETS : &'static str = r#"{{#unless synsets}}<p class="empty">No synsets found for {{key}}</p>{{/unless}}
{{#each synsets}}
<div class="synset" id="{{id}}">
<h3><a href="{{@root.context}}/synset/{{id}}">{{id}}</a> <span class="pos">{{pos_name}}</span></h3>
<p class="lemmas">{{#each lemmas}}{{#if @index}}, {{/if}}{{this}}{{/each}}</p>
<p class="definition">{{definition}}</p>
{{#each examples}}<p class="example">&ldquo;{{this}}&rdquo;</p>
{{/each}}
{{#if has_subcats}}
<div class="subcats">
<h4>Sentence frames</h4>
<ul class="sentences">
{{#each sentences}}<li>{{this}}</li>
{{/each}}
</ul>
{{#each underlined}}
<ul class="lemma-frames">
{{#each frames}}<li>{{{this}}}</li>
{{/each}}
</ul>
{{/each}}
</div>
{{/if}}
{{#if failed}}<p class="error">The relations of this synset could not be loaded.</p>{{/if}}
{{#each relation_groups}}
<div class="relation">
<h4>{{name}}</h4>
<ul>
{{#each relations}}<li><a href="{{@root.context}}/synset/{{target}}">{{#each lemmas}}{{#if @index}}, {{/if}}{{this}}{{else}}{{target}}{{/each}}</a> <span class="definition">{{definition}}</span></li>
{{/each}}
</ul>
</div>
{{/each}}
{{#unless exhausted}}<a class="more" href="{{@root.context}}/synset/{{id}}?more={{pages}}">More relations</a>{{/unless}}
</div>
{{/each}}
"#;

pub static STYLESHEET : &'static str = r#"body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }
form.search { margin-bottom: 2em; }
.synset { border-bottom: 1px solid #ddd; padding-bottom: 1em; }
.pos { color: #888; font-size: 80%; }
.example { font-style: italic; }
.underline { text-decoration: underline; }
.relation h4 { margin-bottom: 0.2em; }
.relation .definition { color: #555; }
.error { color: #a00; }
"#;
