/*!
# Introduction to Rap assembly

Every expression is a parenthesized opcode followed by its arguments. The
expressions on a line run left to right and each one may leave a value on
the stack. When the line ends, the value in the first stack cell is the
result.

<pre><code>&nbsp;> (int 42)
&nbsp;  Source: (int 42)
&nbsp;  Object: [1, 0, 42, 8] (length: 4)
&nbsp;  42
</code></pre>

Decimal integers are written plainly. Hexadecimal integers start with a
`$` and use lowercase digits: `(int $ff)`. There are no negative literals;
subtract from zero instead.

## Arithmetic

`(sub a b)` computes `a - b`. `(mul a b)` multiplies. `(inc a)` adds one.
`(le a b)` is `true` when `a <= b` and `false` otherwise. Arithmetic on
anything but integers, or a result that does not fit in 32 bits, stops
the line with an error.

## Locals

The stack doubles as the local variables. `(getl n)` pushes a copy of
cell `n` and `(setl n x)` stores `x` into cell `n`. A cell must already
hold a value before it can be named.

<pre><code>&nbsp;> (int 1) (setl 0 (mul (int 6) (int 7)))
&nbsp;  42
</code></pre>

## Control

`(ifn c body...)` runs the body only when `c` is `false`. `(loop body...)`
repeats its body until a `(brk)` inside it is reached. Whatever the body
left on the stack is dropped at the end of every pass.

<pre><code>&nbsp;> (int 0) (loop (ifn (le (getl 0) (int 9)) (brk)) (setl 0 (inc (getl 0))))
&nbsp;  10
</code></pre>

## Routines

A name written with a leading backquote pushes a native routine. `(call f
args...)` calls it. `` `printInt`` prints an integer and returns the
number of bytes it wrote; `` `subtractInt`` takes two integers.

<pre><code>&nbsp;> (call `printInt (int 42))
&nbsp;  42
&nbsp;  3
</code></pre>

## Options

`--listing` prints the disassembled program before running it. `--trace`
prints every instruction as it executes.

<pre><code>&nbsp;  FRAME 1
&nbsp;  0001  INT 42
&nbsp;  0003  RETURN
</code></pre>

*/
