/*!
# The doggo Language

A doggo program is a sequence of statements separated by any whitespace.
Every value is a signed 32-bit integer. A value is true when it is
greater than zero; zero and negative values are false.

Run one or more programs with:
```text
doggo program.txt another.txt
```
Stop a running program with CTRL-C.

## Statements

<pre><code>&nbsp;  lassie AWOO 5
&nbsp;  lassie
&nbsp;  5
</code></pre>

`name AWOO expression` assigns to a variable. Any other statement is an
expression, and its value is printed on a line by itself. Variables never
assigned read as 0.

<pre><code>&nbsp;  RUF? roi YAP 2 VUH
&nbsp;      roi AWOO roi ARF 3
&nbsp;  ROWH
&nbsp;      roi AWOO roi WOOF 100
&nbsp;  ARRUF
</code></pre>

`RUF? expression VUH ... ROWH ... ARRUF` runs the first block when the
expression is true and the `ROWH` block otherwise. `ROWH` is optional.

<pre><code>&nbsp;  GRRR milo YIP 5 BOW
&nbsp;      milo AWOO milo WOOF 1
&nbsp;  BORF
</code></pre>

`GRRR expression BOW ... BORF` repeats the block while the expression
is true.

## Expressions

An expression is a number or variable, optionally followed by an operator
and another expression. There is no precedence and no parentheses: the
right side of an operator is everything after it.
So `2 BARK 3 BARK 4` is `2 - (3 - 4)`, which is 3.

| doggo  | english | meaning |
|--------|---------|---------|
| `WOOF` | `+`     | add |
| `BARK` | `-`     | subtract |
| `ARF`  | `*`     | multiply |
| `YIP`  | `<`     | right minus left, true when left is less |
| `YAP`  | `>`     | left minus right, true when left is greater |

Comparisons have no boolean result. `3 YIP 5` prints 2.

## Dialects

Pass `--dialect english` to spell the keywords `IF THEN ELSE ENDIF`,
`WHILE DO ENDWHILE` and `ASSIGN`, with the operators as symbols.
Keywords of the active dialect cannot be used as variable names.

*/
